//! Side-effecting operations on the model
//!
//! Each action mutates the [`Model`] and talks to a service (camera
//! controller, desktop commands, the filesystem). Failures never escape:
//! they are logged and turned into toasts.

pub mod generator;
pub mod scanner;

use crate::model::{Model, Screen};
use crate::services::ScanController;

/// Switch screens, keeping camera ownership tied to the scanner screen.
///
/// Leaving the scanner releases the camera; entering it acquires one.
pub async fn navigate(model: &mut Model, controller: &mut ScanController, to: Screen) {
    let from = model.navigate(to);
    if from == to {
        return;
    }
    tracing::debug!("Navigate {:?} -> {:?}", from, to);

    if from == Screen::Scanner {
        controller.shutdown().await;
        controller.cancel_file_decode();
    }
    if to == Screen::Scanner {
        scanner::start_scanning(model, controller).await;
    }
}
