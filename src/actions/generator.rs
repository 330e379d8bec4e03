//! Generator actions: copy, download, share
//!
//! Every action is a no-op while there is no payload, and every failure ends
//! as a toast.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::logic;
use crate::model::{GeneratorAction, Model};
use crate::qr::QrMatrix;
use crate::services::Desktop;

/// Copy the raw payload to the clipboard
pub fn copy_text(model: &mut Model, desktop: &dyn Desktop) {
    let Some(text) = model.generator.qr_payload().map(str::to_string) else {
        return;
    };

    match desktop.copy_text(&text) {
        Ok(()) => model.show_toast("Text copied!"),
        Err(e) => {
            tracing::warn!("Clipboard error: {:#}", e);
            model.show_error("Failed to copy text");
        }
    }
}

/// Write the rendered code as a PNG into the download directory.
///
/// Returns the written path on success.
pub fn download(model: &mut Model, config: &Config) -> Option<PathBuf> {
    let text = model.generator.qr_payload()?.to_string();
    let dir = config.resolved_download_dir();

    match write_png(&text, &dir, config.qr_size) {
        Ok(path) => {
            model.show_toast(format!("QR code downloaded: {}", path.display()));
            Some(path)
        }
        Err(e) => {
            tracing::warn!("Download error: {:#}", e);
            model.show_error(&format!(
                "Failed to download QR code: {}",
                logic::errors::format_error_message(&e)
            ));
            None
        }
    }
}

fn write_png(text: &str, dir: &Path, size: u32) -> Result<PathBuf> {
    let png = QrMatrix::encode(text)?.to_png(size)?;
    let path = logic::download::unique_download_path(dir, Path::exists);
    std::fs::write(&path, png).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Hand the payload to the share command
pub fn share(model: &mut Model, desktop: &dyn Desktop) {
    let text = match model.generator.qr_payload() {
        Some(text) if desktop.can_share() => text.to_string(),
        _ => {
            model.show_error("Sharing not supported");
            return;
        }
    };

    if let Err(e) = desktop.share_text(&text) {
        tracing::warn!("Share error: {:#}", e);
        model.show_error("Failed to share");
    }
}

/// Run the highlighted button of the action row
pub fn run_selected(model: &mut Model, desktop: &dyn Desktop, config: &Config) {
    if !model.generator.has_qr() {
        return;
    }
    match model.generator.selected_action {
        GeneratorAction::Copy => copy_text(model, desktop),
        GeneratorAction::Download => {
            download(model, config);
        }
        GeneratorAction::Share => share(model, desktop),
    }
}
