//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions.
//! The path prompt, when open, takes every key; otherwise keys go to the
//! handler of the current screen.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::App;
use qrkit::logic::editor;
use qrkit::model::{GeneratorAction, GeneratorFocus, ScannerAction, Screen};

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit().await;
        return Ok(());
    }

    if app.model.ui.path_prompt.is_some() {
        handle_path_prompt_key(app, key);
        return Ok(());
    }

    match app.model.screen {
        Screen::Landing => handle_landing_key(app, key).await,
        Screen::Generator => handle_generator_key(app, key).await,
        Screen::Scanner => handle_scanner_key(app, key).await,
    }

    Ok(())
}

/// Plain character input (no Ctrl/Alt chords)
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// Left/right in a button row, with h/l in vim mode
fn horizontal(app: &App, key: &KeyEvent) -> Option<bool> {
    match key.code {
        KeyCode::Left | KeyCode::BackTab => Some(false),
        KeyCode::Right => Some(true),
        KeyCode::Char('h') if app.model.ui.vim_mode => Some(false),
        KeyCode::Char('l') if app.model.ui.vim_mode => Some(true),
        _ => None,
    }
}

async fn handle_landing_key(app: &mut App, key: KeyEvent) {
    if horizontal(app, &key).is_some() || key.code == KeyCode::Tab {
        app.model.landing = app.model.landing.toggle();
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.open_landing_choice().await,
        KeyCode::Char('s') => app.navigate(Screen::Scanner).await,
        KeyCode::Char('g') => app.navigate(Screen::Generator).await,
        KeyCode::Char('q') | KeyCode::Esc => app.quit().await,
        _ => {}
    }
}

async fn handle_generator_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_home().await;
            return;
        }
        KeyCode::Tab => {
            app.model.generator.toggle_focus();
            return;
        }
        _ => {}
    }

    match app.model.generator.focus {
        GeneratorFocus::Editor => handle_editor_key(app, key),
        GeneratorFocus::Actions => handle_generator_actions_key(app, key),
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    let generator = &mut app.model.generator;

    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => generator.clear(),
        KeyCode::Enter => generator.insert_char('\n'),
        KeyCode::Backspace => generator.backspace(),
        KeyCode::Delete => generator.delete(),
        KeyCode::Left => generator.move_left(),
        KeyCode::Right => generator.move_right(),
        KeyCode::Home => generator.move_home(),
        KeyCode::End => generator.move_end(),
        _ => {
            if let Some(c) = typed_char(&key) {
                generator.insert_char(c);
            }
        }
    }
}

fn handle_generator_actions_key(app: &mut App, key: KeyEvent) {
    if let Some(forward) = horizontal(app, &key) {
        let generator = &mut app.model.generator;
        generator.selected_action = if forward {
            generator.selected_action.next()
        } else {
            generator.selected_action.prev()
        };
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.run_generator_action(),
        KeyCode::Char('c') => {
            app.model.generator.selected_action = GeneratorAction::Copy;
            app.copy_generator_text();
        }
        KeyCode::Char('d') => {
            app.model.generator.selected_action = GeneratorAction::Download;
            app.download_qr();
        }
        KeyCode::Char('s') => {
            app.model.generator.selected_action = GeneratorAction::Share;
            app.share_generator_text();
        }
        _ => {}
    }
}

async fn handle_scanner_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_home().await;
            return;
        }
        KeyCode::Char('q') => {
            app.quit().await;
            return;
        }
        KeyCode::Char('u') if app.model.scanner.can_upload() => {
            app.open_path_prompt();
            return;
        }
        _ => {}
    }

    if app.model.scanner.result.is_none() {
        match key.code {
            KeyCode::Char('f') => app.toggle_flash(),
            // Retry after "No camera found" or a failed start
            KeyCode::Char('r') if !app.model.scanner.is_scanning() => app.rescan().await,
            _ => {}
        }
        return;
    }

    if let Some(forward) = horizontal(app, &key) {
        let scanner = &mut app.model.scanner;
        scanner.selected_action = if forward {
            scanner.selected_action.next()
        } else {
            scanner.selected_action.prev()
        };
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.run_scanner_action().await,
        KeyCode::Char('c') => {
            app.model.scanner.selected_action = ScannerAction::Copy;
            app.copy_scan_result();
        }
        KeyCode::Char('o') => {
            app.model.scanner.selected_action = ScannerAction::Open;
            app.open_scan_result();
        }
        KeyCode::Char('r') => app.rescan().await,
        _ => {}
    }
}

fn handle_path_prompt_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_path_prompt(),
        KeyCode::Enter => app.submit_path_prompt(),
        _ => {
            let Some(prompt) = app.model.ui.path_prompt.as_mut() else {
                return;
            };
            match key.code {
                KeyCode::Backspace => {
                    prompt.cursor = editor::delete_before(&mut prompt.input, prompt.cursor);
                }
                KeyCode::Delete => editor::delete_at(&mut prompt.input, prompt.cursor),
                KeyCode::Left => prompt.cursor = editor::move_left(prompt.cursor),
                KeyCode::Right => prompt.cursor = editor::move_right(&prompt.input, prompt.cursor),
                KeyCode::Home => prompt.cursor = 0,
                KeyCode::End => prompt.cursor = prompt.input.chars().count(),
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    prompt.input.clear();
                    prompt.cursor = 0;
                }
                _ => {
                    if let Some(c) = typed_char(&key) {
                        prompt.cursor = editor::insert_char(&mut prompt.input, prompt.cursor, c);
                    }
                }
            }
        }
    }
}
