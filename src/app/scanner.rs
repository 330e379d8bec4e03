//! Scanner orchestration methods
//!
//! - Applying scan worker events (and keeping the preview frame)
//! - Copy / open / rescan / flash
//! - The image path prompt

use crate::App;
use qrkit::model::PathPromptState;
use qrkit::{actions, services::ScanEvent};

/// Largest preview frame handed to the graphics protocol, in terminal cells
const PREVIEW_MAX_CELLS: (u32, u32) = (120, 40);

impl App {
    pub(crate) async fn handle_scan_event(&mut self, event: ScanEvent) {
        let frame =
            actions::scanner::handle_scan_event(&mut self.model, &mut self.controller, event).await;

        if !self.model.scanner.is_scanning() {
            if self.preview.take().is_some() {
                self.model.ui.graphics_cleanup = true;
            }
            return;
        }

        let (Some(frame), Some(picker)) = (frame, self.image_picker.as_mut()) else {
            return;
        };

        // Pre-downscale so protocol encoding keeps up with the frame rate
        let font_size = picker.font_size();
        let max_width = PREVIEW_MAX_CELLS.0 * font_size.0 as u32;
        let max_height = PREVIEW_MAX_CELLS.1 * font_size.1 as u32;
        let frame = if frame.width() > max_width || frame.height() > max_height {
            frame.resize(max_width, max_height, image::imageops::FilterType::Triangle)
        } else {
            frame
        };
        self.preview = Some(picker.new_resize_protocol(frame));
    }

    pub(crate) async fn rescan(&mut self) {
        actions::scanner::rescan(&mut self.model, &mut self.controller).await;
    }

    pub(crate) fn toggle_flash(&mut self) {
        actions::scanner::toggle_flash(&self.model, &self.controller);
    }

    pub(crate) fn copy_scan_result(&mut self) {
        actions::scanner::copy_result(&mut self.model, &self.desktop);
    }

    pub(crate) fn open_scan_result(&mut self) {
        actions::scanner::open_result(&mut self.model, &self.desktop);
    }

    pub(crate) async fn run_scanner_action(&mut self) {
        actions::scanner::run_selected(&mut self.model, &mut self.controller, &self.desktop).await;
    }

    /// Open the path prompt used to pick an image file
    pub(crate) fn open_path_prompt(&mut self) {
        self.model.ui.path_prompt = Some(PathPromptState::default());
    }

    pub(crate) fn close_path_prompt(&mut self) {
        self.model.ui.path_prompt = None;
    }

    /// Submit the path prompt: decode the file in the background
    pub(crate) fn submit_path_prompt(&mut self) {
        let Some(prompt) = self.model.ui.path_prompt.take() else {
            return;
        };
        if !actions::scanner::request_image_decode(&mut self.controller, &prompt.input) {
            tracing::debug!("Empty image path, prompt dismissed");
        }
    }
}
