//! Navigation orchestration methods
//!
//! Screen changes own the camera: leaving the scanner releases it, entering
//! the scanner acquires one.

use crate::App;
use qrkit::{actions, Screen};

impl App {
    pub(crate) async fn navigate(&mut self, to: Screen) {
        let from = self.model.screen;
        actions::navigate(&mut self.model, &mut self.controller, to).await;

        if from != to {
            // Payload graphics belong to the screen that was left
            self.qr_image = None;
            self.preview = None;
            self.model.ui.graphics_cleanup = self.image_picker.is_some();
        }
    }

    /// Back to the landing screen (Esc on generator and scanner)
    pub(crate) async fn go_home(&mut self) {
        self.navigate(Screen::Landing).await;
    }

    /// Open the screen highlighted on the landing page
    pub(crate) async fn open_landing_choice(&mut self) {
        let target = self.model.landing.target();
        self.navigate(target).await;
    }

    pub(crate) async fn quit(&mut self) {
        self.controller.shutdown().await;
        self.model.scanner.camera_stopped();
        self.model.ui.should_quit = true;
    }
}
