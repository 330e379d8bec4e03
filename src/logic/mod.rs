//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or a camera:
//! - camera: Preferred camera selection
//! - download: Download file naming
//! - editor: Text area editing operations
//! - errors: Error message formatting
//! - layout: Centering and sizing calculations
//! - platform: Default external commands per platform
//! - region: Detection region inside a camera frame
//! - ui: Toast timing and button selection cycling
//! - url: Parsing decoded payloads as openable URLs

pub mod camera;
pub mod download;
pub mod editor;
pub mod errors;
pub mod layout;
pub mod platform;
pub mod region;
pub mod ui;
pub mod url;
