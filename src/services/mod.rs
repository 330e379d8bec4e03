//! External Services
//!
//! This module contains services that interact with the host system:
//! - camera: Camera backends (device enumeration, frame capture)
//! - scanner: Background scan worker and its controller
//! - desktop: Clipboard, URL opener and share commands

pub mod camera;
pub mod desktop;
pub mod scanner;

// Re-export commonly used types for convenience
pub use camera::{default_backend, CameraBackend, CameraStream, NoCameraBackend};
pub use desktop::{CommandDesktop, Desktop};
pub use scanner::{CameraEvent, ScanController, ScanEvent, ScanSettings, StartOutcome};
