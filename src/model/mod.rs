//! Pure Application Model - Elm Architecture
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **GeneratorModel**: Payload text and the action row
//! - **ScannerModel**: Scan phase, decoded result, active camera
//! - **UiModel**: Toasts, the path prompt, app-wide flags
//!
//! Key principles:
//! - Clone + Debug: Can snapshot and compare state
//! - No services: Camera workers and external commands live in the App
//! - Payloads exist only in memory and are dropped on navigation

pub mod generator;
pub mod scanner;
pub mod types;
pub mod ui;

pub use generator::GeneratorModel;
pub use scanner::ScannerModel;
pub use types::*;
pub use ui::UiModel;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Screen currently shown
    pub screen: Screen,

    /// Highlighted landing button
    pub landing: LandingChoice,

    pub generator: GeneratorModel,

    pub scanner: ScannerModel,

    pub ui: UiModel,
}

impl Model {
    /// Create initial model with default settings
    pub fn new(vim_mode: bool) -> Self {
        Self {
            screen: Screen::Landing,
            landing: LandingChoice::default(),
            generator: GeneratorModel::new(),
            scanner: ScannerModel::new(),
            ui: UiModel::new(vim_mode),
        }
    }

    /// Switch screens, dropping the payload of the screen being left.
    ///
    /// Returns the previous screen. The caller owns releasing the camera
    /// when the scanner is left.
    pub fn navigate(&mut self, to: Screen) -> Screen {
        let from = self.screen;
        if from == to {
            return from;
        }

        match from {
            Screen::Generator => self.generator.clear(),
            Screen::Scanner => self.scanner.reset(),
            Screen::Landing => {}
        }
        self.ui.close_all_modals();
        self.screen = to;
        from
    }

    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }

    /// Show toast message
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.ui.show_toast(message);
    }

    pub fn show_error(&mut self, message: &str) {
        self.ui.show_error(message);
    }

    /// Dismiss toast message
    pub fn dismiss_toast(&mut self) {
        self.ui.dismiss_toast();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let model = Model::new(false);
        assert_eq!(model.screen, Screen::Landing);
        assert!(model.generator.text.is_empty());
        assert!(model.scanner.result.is_none());
        assert!(!model.ui.vim_mode);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = Model::new(false);
        let _cloned = model.clone();
    }

    #[test]
    fn test_leaving_generator_clears_payload() {
        let mut model = Model::new(false);
        model.navigate(Screen::Generator);
        model.generator.insert_str("https://example.com");

        let from = model.navigate(Screen::Landing);
        assert_eq!(from, Screen::Generator);
        assert!(model.generator.text.is_empty());
    }

    #[test]
    fn test_leaving_scanner_clears_result() {
        let mut model = Model::new(false);
        model.navigate(Screen::Scanner);
        model.scanner.show_result("hello".to_string());

        model.navigate(Screen::Landing);
        assert!(model.scanner.result.is_none());
        assert_eq!(model.scanner.phase, ScanPhase::Idle);
    }

    #[test]
    fn test_navigate_to_same_screen_keeps_state() {
        let mut model = Model::new(false);
        model.navigate(Screen::Generator);
        model.generator.insert_char('a');
        model.navigate(Screen::Generator);
        assert_eq!(model.generator.text, "a");
    }

    #[test]
    fn test_navigation_closes_prompt() {
        let mut model = Model::new(false);
        model.navigate(Screen::Scanner);
        model.ui.path_prompt = Some(PathPromptState::default());
        model.navigate(Screen::Landing);
        assert!(!model.has_modal());
    }
}
