//! Generator Model
//!
//! The payload being typed and the action row state.

use super::types::{GeneratorAction, GeneratorFocus};
use crate::logic::editor;

#[derive(Clone, Debug, Default)]
pub struct GeneratorModel {
    /// Payload text
    pub text: String,

    /// Char index of the editing cursor
    pub cursor: usize,

    pub focus: GeneratorFocus,

    pub selected_action: GeneratorAction,
}

impl GeneratorModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
            ..Self::default()
        }
    }

    /// Payload to encode; a QR code exists only for non-empty text
    pub fn qr_payload(&self) -> Option<&str> {
        if self.text.is_empty() {
            None
        } else {
            Some(&self.text)
        }
    }

    pub fn has_qr(&self) -> bool {
        self.qr_payload().is_some()
    }

    /// Copy, download and share are only offered alongside a rendered code
    pub fn available_actions(&self) -> &'static [GeneratorAction] {
        if self.has_qr() {
            &GeneratorAction::ALL
        } else {
            &[]
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.cursor = editor::insert_char(&mut self.text, self.cursor, c);
    }

    pub fn insert_str(&mut self, s: &str) {
        self.cursor = editor::insert_str(&mut self.text, self.cursor, s);
    }

    pub fn backspace(&mut self) {
        self.cursor = editor::delete_before(&mut self.text, self.cursor);
        self.leave_actions_if_empty();
    }

    pub fn delete(&mut self) {
        editor::delete_at(&mut self.text, self.cursor);
        self.leave_actions_if_empty();
    }

    pub fn move_left(&mut self) {
        self.cursor = editor::move_left(self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = editor::move_right(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Switch between editor and action row; the row is unreachable without a code
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            GeneratorFocus::Editor if self.has_qr() => GeneratorFocus::Actions,
            _ => GeneratorFocus::Editor,
        };
    }

    /// Drop the payload (navigation away)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn leave_actions_if_empty(&mut self) {
        if !self.has_qr() {
            self.focus = GeneratorFocus::Editor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_qr_and_no_actions() {
        let model = GeneratorModel::new();
        assert!(model.qr_payload().is_none());
        assert!(model.available_actions().is_empty());
    }

    #[test]
    fn test_text_enables_all_actions() {
        let mut model = GeneratorModel::new();
        model.insert_char('x');
        assert_eq!(model.qr_payload(), Some("x"));
        assert_eq!(model.available_actions().len(), 3);
    }

    #[test]
    fn test_focus_stays_in_editor_without_qr() {
        let mut model = GeneratorModel::new();
        model.toggle_focus();
        assert_eq!(model.focus, GeneratorFocus::Editor);
    }

    #[test]
    fn test_erasing_text_returns_focus_to_editor() {
        let mut model = GeneratorModel::with_text("a");
        model.toggle_focus();
        assert_eq!(model.focus, GeneratorFocus::Actions);

        model.backspace();
        assert_eq!(model.focus, GeneratorFocus::Editor);
        assert!(!model.has_qr());
    }

    #[test]
    fn test_with_text_places_cursor_at_end() {
        let model = GeneratorModel::with_text("héllo");
        assert_eq!(model.cursor, 5);
    }

    #[test]
    fn test_clear() {
        let mut model = GeneratorModel::with_text("secret");
        model.selected_action = GeneratorAction::Share;
        model.clear();
        assert!(model.text.is_empty());
        assert_eq!(model.selected_action, GeneratorAction::Copy);
    }
}
