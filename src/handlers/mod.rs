//! Event Handlers
//!
//! This module contains handlers for terminal input:
//! - keyboard: User keyboard input, dispatched per screen
//!
//! Scan worker events are applied by the scanner actions in the library.

pub mod keyboard;

// Re-export for convenience
pub use keyboard::handle_key;
