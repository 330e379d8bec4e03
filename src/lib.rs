//! QR Toolkit Library
//!
//! Exposes the UI-independent parts of the app for testing:
//! model, pure logic, the QR codec wrappers, the background services and
//! the actions that tie them together.

pub mod actions;
pub mod config;
pub mod logic;
pub mod model;
pub mod qr;
pub mod services;

pub use model::{Model, Screen};
