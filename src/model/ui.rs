//! UI Model
//!
//! Notifications, the image path prompt and app-wide flags.

use std::time::Instant;

use super::types::PathPromptState;

#[derive(Clone, Debug, Default)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Image path prompt, open while choosing a file to scan
    pub path_prompt: Option<PathPromptState>,

    /// Font size for image rendering (width, height)
    pub image_font_size: Option<(u16, u16)>,

    /// Graphics frames must be cleared before the next draw
    pub graphics_cleanup: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            ..Self::default()
        }
    }

    pub fn has_modal(&self) -> bool {
        self.path_prompt.is_some()
    }

    pub fn close_all_modals(&mut self) {
        self.path_prompt = None;
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// Show an error toast (styled red)
    pub fn show_error(&mut self, message: &str) {
        self.show_toast(crate::logic::errors::error_toast(message));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    pub fn toast_text(&self) -> Option<&str> {
        self.toast_message.as_ref().map(|(text, _)| text.as_str())
    }
}
