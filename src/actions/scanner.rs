//! Scanner actions
//!
//! Bridges the scanner model and the scan controller: starting and stopping
//! the camera, applying worker events, and the copy/open/rescan buttons.

use image::DynamicImage;
use std::path::PathBuf;

use crate::logic;
use crate::model::{Model, Screen, ScannerAction};
use crate::services::{CameraEvent, Desktop, ScanController, ScanEvent, StartOutcome};

/// Acquire a camera if the scanner has no result on screen
pub async fn start_scanning(model: &mut Model, controller: &mut ScanController) {
    if !model.scanner.wants_camera() {
        return;
    }

    match controller.start().await {
        Ok(StartOutcome::Started(camera)) => model.scanner.begin_scanning(camera),
        Ok(StartOutcome::NoCamera) => {
            tracing::debug!("No camera devices found");
            model.scanner.camera_stopped();
            model.show_error("No camera found");
        }
        Err(e) => {
            tracing::warn!("Scanner error: {:#}", e);
            model.scanner.camera_stopped();
            model.show_error("Failed to start scanner");
        }
    }
}

/// Clear the result and acquire the camera again
pub async fn rescan(model: &mut Model, controller: &mut ScanController) {
    controller.shutdown().await;
    model.scanner.clear_result();
    start_scanning(model, controller).await;
}

/// Apply a worker event to the model.
///
/// Returns a preview frame when one should be drawn. Events from sessions
/// that were already stopped are ignored.
pub async fn handle_scan_event(
    model: &mut Model,
    controller: &mut ScanController,
    event: ScanEvent,
) -> Option<DynamicImage> {
    match event {
        ScanEvent::Camera { session, event } => {
            if !controller.is_current(session) {
                tracing::debug!("Ignoring event from stale session {}", session);
                return None;
            }
            apply_camera_event(model, controller, session, event)
        }
        ScanEvent::ImageFile {
            request,
            path,
            result,
        } => {
            if !controller.take_file_result(request) || model.screen != Screen::Scanner {
                tracing::debug!("Dropping stale image result for {}", path.display());
                return None;
            }
            match result {
                Ok(text) => {
                    // The camera is released before the result is shown
                    controller.shutdown().await;
                    model.scanner.show_result(text);
                    model.show_toast("QR code scanned from image!");
                }
                Err(reason) => {
                    tracing::debug!("Image scan failed for {}: {}", path.display(), reason);
                    model.show_error("Failed to scan image");
                }
            }
            None
        }
    }
}

fn apply_camera_event(
    model: &mut Model,
    controller: &mut ScanController,
    session: u64,
    event: CameraEvent,
) -> Option<DynamicImage> {
    match event {
        CameraEvent::Started => {
            tracing::debug!("Session {} streaming", session);
            None
        }
        CameraEvent::Frame(frame) => model.scanner.is_scanning().then_some(frame),
        CameraEvent::Decoded(text) => {
            controller.finish(session);
            model.scanner.show_result(text);
            model.show_toast("QR code scanned!");
            None
        }
        CameraEvent::TorchChanged(on) => {
            model.scanner.flash_on = on;
            None
        }
        CameraEvent::TorchFailed(reason) => {
            tracing::debug!("Torch unavailable: {}", reason);
            model.show_error("Flashlight not supported on this device");
            None
        }
        CameraEvent::Failed(reason) => {
            tracing::warn!("Session {} failed: {}", session, reason);
            controller.finish(session);
            model.scanner.camera_stopped();
            model.show_error("Failed to start scanner");
            None
        }
        CameraEvent::Stopped => {
            controller.finish(session);
            model.scanner.camera_stopped();
            None
        }
    }
}

/// Request the opposite torch state; nothing happens without a running camera
pub fn toggle_flash(model: &Model, controller: &ScanController) {
    if !controller.set_torch(!model.scanner.flash_on) {
        tracing::debug!("Flash toggle ignored, no active camera");
    }
}

/// Copy the decoded payload
pub fn copy_result(model: &mut Model, desktop: &dyn Desktop) {
    let Some(text) = model.scanner.result.clone() else {
        return;
    };

    match desktop.copy_text(&text) {
        Ok(()) => model.show_toast("Copied to clipboard!"),
        Err(e) => {
            tracing::warn!("Clipboard error: {:#}", e);
            model.show_error("Failed to copy");
        }
    }
}

/// Open the decoded payload as a URL. Returns whether the opener was launched.
pub fn open_result(model: &mut Model, desktop: &dyn Desktop) -> bool {
    let Some(text) = model.scanner.result.as_deref() else {
        return false;
    };

    let Some(url) = logic::url::parse_openable_url(text) else {
        model.show_error("Not a valid URL");
        return false;
    };

    match desktop.open_url(&url) {
        Ok(()) => {
            model.show_toast(format!("Opening {}", url));
            true
        }
        Err(e) => {
            tracing::warn!("Open error: {:#}", e);
            model.show_error("Failed to open URL");
            false
        }
    }
}

/// Run the highlighted button below the result
pub async fn run_selected(
    model: &mut Model,
    controller: &mut ScanController,
    desktop: &dyn Desktop,
) {
    if model.scanner.result.is_none() {
        return;
    }
    match model.scanner.selected_action {
        ScannerAction::Copy => copy_result(model, desktop),
        ScannerAction::Open => {
            open_result(model, desktop);
        }
        ScannerAction::Rescan => rescan(model, controller).await,
    }
}

/// Decode the image at a user-entered path on a background worker
pub fn request_image_decode(controller: &mut ScanController, input: &str) -> bool {
    let input = input.trim();
    if input.is_empty() {
        return false;
    }
    let path = expand_home(input);
    tracing::debug!("Decoding image {}", path.display());
    controller.decode_file(path);
    true
}

fn expand_home(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/tmp/qr.png"), PathBuf::from("/tmp/qr.png"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/qr.png"), home.join("qr.png"));
        }
    }
}
