//! Integration tests for the scan result actions (copy and open)

use anyhow::{bail, Result};
use std::cell::RefCell;
use url::Url;

use qrkit::actions;
use qrkit::model::{Model, Screen};
use qrkit::services::Desktop;

#[derive(Default)]
struct RecordingDesktop {
    opened: RefCell<Vec<String>>,
    copied: RefCell<Vec<String>>,
    fail_open: bool,
}

impl Desktop for RecordingDesktop {
    fn copy_text(&self, text: &str) -> Result<()> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }

    fn open_url(&self, url: &Url) -> Result<()> {
        if self.fail_open {
            bail!("no opener");
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }

    fn share_text(&self, _text: &str) -> Result<()> {
        bail!("not used")
    }

    fn can_share(&self) -> bool {
        false
    }
}

fn scanned(payload: &str) -> Model {
    let mut model = Model::new(false);
    model.navigate(Screen::Scanner);
    model.scanner.show_result(payload.to_string());
    model
}

#[test]
fn test_open_valid_url() {
    let mut model = scanned("https://example.com");
    let desktop = RecordingDesktop::default();

    assert!(actions::scanner::open_result(&mut model, &desktop));
    assert_eq!(desktop.opened.borrow().as_slice(), ["https://example.com/"]);
}

#[test]
fn test_open_invalid_url_does_not_navigate() {
    let mut model = scanned("not a url");
    let desktop = RecordingDesktop::default();

    assert!(!actions::scanner::open_result(&mut model, &desktop));
    assert!(desktop.opened.borrow().is_empty());
    assert_eq!(model.ui.toast_text(), Some("Error: Not a valid URL"));
    // The result stays on screen
    assert_eq!(model.scanner.result.as_deref(), Some("not a url"));
}

#[test]
fn test_open_failure_is_reported() {
    let mut model = scanned("https://example.com/path?q=1");
    let desktop = RecordingDesktop {
        fail_open: true,
        ..RecordingDesktop::default()
    };

    assert!(!actions::scanner::open_result(&mut model, &desktop));
    assert_eq!(model.ui.toast_text(), Some("Error: Failed to open URL"));
}

#[test]
fn test_open_without_result_does_nothing() {
    let mut model = Model::new(false);
    let desktop = RecordingDesktop::default();
    assert!(!actions::scanner::open_result(&mut model, &desktop));
    assert!(model.ui.toast_text().is_none());
}

#[test]
fn test_copy_result() {
    let mut model = scanned("WIFI:S:home;T:WPA;P:secret;;");
    let desktop = RecordingDesktop::default();

    actions::scanner::copy_result(&mut model, &desktop);

    assert_eq!(
        desktop.copied.borrow().as_slice(),
        ["WIFI:S:home;T:WPA;P:secret;;"]
    );
    assert_eq!(model.ui.toast_text(), Some("Copied to clipboard!"));
}
