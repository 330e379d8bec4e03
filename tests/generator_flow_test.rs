//! Integration tests for the generator screen actions
//!
//! These tests verify the complete flow from typed text to the three
//! actions, using a recording desktop in place of the clipboard and share
//! commands, and a temporary directory for downloads.

use anyhow::{bail, Result};
use std::cell::RefCell;
use std::path::PathBuf;
use url::Url;

use qrkit::actions;
use qrkit::config::Config;
use qrkit::model::{GeneratorAction, GeneratorFocus, Model, Screen};
use qrkit::services::Desktop;

#[derive(Default)]
struct RecordingDesktop {
    copied: RefCell<Vec<String>>,
    shared: RefCell<Vec<String>>,
    can_share: bool,
    fail_share: bool,
}

impl Desktop for RecordingDesktop {
    fn copy_text(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn open_url(&self, _url: &Url) -> Result<()> {
        Ok(())
    }

    fn share_text(&self, text: &str) -> Result<()> {
        if self.fail_share {
            bail!("share tool exited");
        }
        self.shared.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn can_share(&self) -> bool {
        self.can_share
    }
}

fn generator_with(text: &str) -> Model {
    let mut model = Model::new(false);
    model.navigate(Screen::Generator);
    model.generator.insert_str(text);
    model
}

fn download_config(dir: PathBuf) -> Config {
    Config {
        download_dir: Some(dir),
        ..Config::default()
    }
}

#[test]
fn test_empty_text_renders_nothing_and_offers_no_actions() {
    let mut model = generator_with("");
    assert!(!model.generator.has_qr());
    assert!(model.generator.available_actions().is_empty());

    // The action row cannot take focus without a code
    model.generator.toggle_focus();
    assert_eq!(model.generator.focus, GeneratorFocus::Editor);

    let desktop = RecordingDesktop::default();
    actions::generator::copy_text(&mut model, &desktop);
    assert!(desktop.copied.borrow().is_empty());
    assert!(model.ui.toast_text().is_none());
}

#[test]
fn test_text_enables_three_actions() {
    let model = generator_with("https://example.com");
    assert_eq!(model.generator.qr_payload(), Some("https://example.com"));
    assert_eq!(
        model.generator.available_actions(),
        &[
            GeneratorAction::Copy,
            GeneratorAction::Download,
            GeneratorAction::Share
        ]
    );
}

#[test]
fn test_copy_text() {
    let mut model = generator_with("hello world");
    let desktop = RecordingDesktop::default();

    actions::generator::copy_text(&mut model, &desktop);

    assert_eq!(desktop.copied.borrow().as_slice(), ["hello world"]);
    assert_eq!(model.ui.toast_text(), Some("Text copied!"));
}

#[test]
fn test_download_writes_png_without_overwriting() {
    let dir = tempfile::tempdir().unwrap();
    let config = download_config(dir.path().to_path_buf());
    let mut model = generator_with("https://example.com");

    let first = actions::generator::download(&mut model, &config).unwrap();
    assert_eq!(first, dir.path().join("qr-code.png"));
    let bytes = std::fs::read(&first).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(
        model.ui.toast_text(),
        Some(format!("QR code downloaded: {}", first.display()).as_str())
    );

    let second = actions::generator::download(&mut model, &config).unwrap();
    assert_eq!(second, dir.path().join("qr-code (1).png"));
}

#[test]
fn test_downloaded_png_scans_back() {
    let dir = tempfile::tempdir().unwrap();
    let config = download_config(dir.path().to_path_buf());
    let mut model = generator_with("Line one\nLine two");

    let path = actions::generator::download(&mut model, &config).unwrap();
    assert_eq!(
        qrkit::qr::decode_file(&path).unwrap(),
        "Line one\nLine two"
    );
}

#[test]
fn test_download_into_missing_directory_fails_with_toast() {
    let dir = tempfile::tempdir().unwrap();
    let config = download_config(dir.path().join("missing"));
    let mut model = generator_with("hello");

    assert!(actions::generator::download(&mut model, &config).is_none());
    let toast = model.ui.toast_text().unwrap();
    assert!(toast.starts_with("Error: Failed to download QR code"));
}

#[test]
fn test_share_unsupported() {
    let mut model = generator_with("hello");
    let desktop = RecordingDesktop::default();

    actions::generator::share(&mut model, &desktop);

    assert!(desktop.shared.borrow().is_empty());
    assert_eq!(model.ui.toast_text(), Some("Error: Sharing not supported"));
}

#[test]
fn test_share_with_empty_text_is_unsupported() {
    let mut model = generator_with("");
    let desktop = RecordingDesktop {
        can_share: true,
        ..RecordingDesktop::default()
    };

    actions::generator::share(&mut model, &desktop);
    assert_eq!(model.ui.toast_text(), Some("Error: Sharing not supported"));
}

#[test]
fn test_share_failure() {
    let mut model = generator_with("hello");
    let desktop = RecordingDesktop {
        can_share: true,
        fail_share: true,
        ..RecordingDesktop::default()
    };

    actions::generator::share(&mut model, &desktop);
    assert_eq!(model.ui.toast_text(), Some("Error: Failed to share"));
}

#[test]
fn test_run_selected_follows_action_row() {
    let mut model = generator_with("hello");
    let desktop = RecordingDesktop {
        can_share: true,
        ..RecordingDesktop::default()
    };
    let config = Config::default();

    model.generator.toggle_focus();
    assert_eq!(model.generator.focus, GeneratorFocus::Actions);
    model.generator.selected_action = model.generator.selected_action.prev();
    assert_eq!(model.generator.selected_action, GeneratorAction::Share);

    actions::generator::run_selected(&mut model, &desktop, &config);
    assert_eq!(desktop.shared.borrow().as_slice(), ["hello"]);
}

#[test]
fn test_leaving_generator_drops_payload() {
    let mut model = generator_with("secret");
    model.navigate(Screen::Landing);
    model.navigate(Screen::Generator);
    assert!(!model.generator.has_qr());
}
