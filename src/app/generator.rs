//! Generator orchestration methods
//!
//! Thin wrappers around the generator actions plus the graphics-protocol
//! rendering of the code, which only the terminal front end needs.

use crate::{App, QrImage};
use qrkit::config::QrRenderMode;
use qrkit::{actions, qr::QrMatrix};

impl App {
    pub(crate) fn copy_generator_text(&mut self) {
        actions::generator::copy_text(&mut self.model, &self.desktop);
    }

    pub(crate) fn download_qr(&mut self) {
        actions::generator::download(&mut self.model, &self.config);
    }

    pub(crate) fn share_generator_text(&mut self) {
        actions::generator::share(&mut self.model, &self.desktop);
    }

    pub(crate) fn run_generator_action(&mut self) {
        actions::generator::run_selected(&mut self.model, &self.desktop, &self.config);
    }

    /// Whether the QR code is drawn through a terminal graphics protocol
    pub(crate) fn uses_graphics_qr(&self) -> bool {
        self.config.qr_render == QrRenderMode::Image && self.image_picker.is_some()
    }

    /// Rebuild the graphics rendering when the payload changed
    pub(crate) fn sync_qr_image(&mut self) {
        if !self.uses_graphics_qr() {
            return;
        }

        let Some(payload) = self.model.generator.qr_payload() else {
            self.qr_image = None;
            return;
        };
        if self
            .qr_image
            .as_ref()
            .is_some_and(|current| current.payload == payload)
        {
            return;
        }
        let payload = payload.to_string();

        let Some(picker) = self.image_picker.as_mut() else {
            return;
        };
        match QrMatrix::encode(&payload) {
            Ok(matrix) => {
                let img = image::DynamicImage::ImageLuma8(matrix.to_image(self.config.qr_size));
                let protocol = picker.new_resize_protocol(img);
                self.qr_image = Some(QrImage { payload, protocol });
            }
            Err(e) => {
                tracing::warn!("QR render error: {:#}", e);
                self.qr_image = None;
            }
        }
    }
}
