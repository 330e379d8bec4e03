use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::generator::action_key;
use qrkit::model::{GeneratorAction, GeneratorFocus, Model, Screen};

/// What the legend needs to know about the current screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendState {
    pub screen: Screen,
    pub vim_mode: bool,
    pub generator_focus: GeneratorFocus,
    pub has_qr: bool,
    pub has_result: bool,
    pub scanning: bool,
    pub prompt_open: bool,
}

impl LegendState {
    pub fn from_model(model: &Model) -> Self {
        Self {
            screen: model.screen,
            vim_mode: model.ui.vim_mode,
            generator_focus: model.generator.focus,
            has_qr: model.generator.has_qr(),
            has_result: model.scanner.result.is_some(),
            scanning: model.scanner.is_scanning(),
            prompt_open: model.ui.path_prompt.is_some(),
        }
    }
}

fn key(spans: &mut Vec<Span<'static>>, key: &'static str, label: &'static str) {
    spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(format!(":{}  ", label)));
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(state: LegendState) -> Vec<Span<'static>> {
    let mut spans = vec![];

    if state.prompt_open {
        key(&mut spans, "Enter", "Scan Image");
        key(&mut spans, "Esc", "Cancel");
        return spans;
    }

    let row_nav = if state.vim_mode { "h/l" } else { "←/→" };

    match state.screen {
        Screen::Landing => {
            key(&mut spans, row_nav, "Select");
            key(&mut spans, "Enter", "Open");
            key(&mut spans, "s", "Scan");
            key(&mut spans, "g", "Generate");
        }
        Screen::Generator => {
            match state.generator_focus {
                GeneratorFocus::Editor => {
                    key(&mut spans, "Enter", "Newline");
                    key(&mut spans, "^U", "Clear");
                    if state.has_qr {
                        key(&mut spans, "Tab", "Actions");
                    }
                }
                GeneratorFocus::Actions => {
                    key(&mut spans, row_nav, "Select");
                    key(&mut spans, "Enter", "Run");
                    for action in GeneratorAction::ALL {
                        key(&mut spans, action_key(action), action.label());
                    }
                    key(&mut spans, "Tab", "Edit");
                }
            }
            key(&mut spans, "Esc", "Home");
        }
        Screen::Scanner => {
            if state.has_result {
                key(&mut spans, row_nav, "Select");
                key(&mut spans, "Enter", "Run");
                key(&mut spans, "c", "Copy");
                key(&mut spans, "o", "Open");
                key(&mut spans, "r", "Scan Again");
            } else if state.scanning {
                key(&mut spans, "f", "Flash");
                key(&mut spans, "u", "Upload");
            } else {
                key(&mut spans, "r", "Retry Camera");
                key(&mut spans, "u", "Upload");
            }
            key(&mut spans, "Esc", "Home");
        }
    }

    // Quit - always available (the generator editor takes q as text)
    if state.screen == Screen::Generator {
        spans.push(Span::styled("^C", Style::default().fg(Color::Yellow)));
    } else {
        spans.push(Span::styled("q", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::raw(":Quit"));

    spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(state: LegendState) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend (changes with screen, focus and vim mode)
pub fn render_legend(f: &mut Frame, area: Rect, state: LegendState) {
    f.render_widget(build_legend_paragraph(state), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, state: LegendState) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let paragraph_for_counting = Paragraph::new(vec![Line::from(build_hotkey_spans(state))])
        .wrap(ratatui::widgets::Wrap { trim: false });

    // Calculate available width (subtract left + right borders)
    let available_width = terminal_width.saturating_sub(2);

    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to convert spans to plain text for assertions
    fn spans_to_text(spans: &[Span]) -> String {
        spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect::<Vec<_>>()
            .join("")
    }

    fn state(screen: Screen) -> LegendState {
        LegendState {
            screen,
            vim_mode: false,
            generator_focus: GeneratorFocus::Editor,
            has_qr: false,
            has_result: false,
            scanning: false,
            prompt_open: false,
        }
    }

    #[test]
    fn test_landing_legend() {
        let text = spans_to_text(&build_hotkey_spans(state(Screen::Landing)));
        assert!(text.contains("s:Scan"));
        assert!(text.contains("g:Generate"));
        assert!(text.ends_with("q:Quit"));
    }

    #[test]
    fn test_generator_actions_hidden_without_qr() {
        let text = spans_to_text(&build_hotkey_spans(state(Screen::Generator)));
        assert!(!text.contains("Tab:Actions"));
        assert!(text.ends_with("^C:Quit"));
    }

    #[test]
    fn test_generator_action_row_keys() {
        let legend = LegendState {
            generator_focus: GeneratorFocus::Actions,
            has_qr: true,
            ..state(Screen::Generator)
        };
        let text = spans_to_text(&build_hotkey_spans(legend));
        assert!(text.contains("c:Copy Text"));
        assert!(text.contains("d:Download"));
        assert!(text.contains("s:Share"));
    }

    #[test]
    fn test_scanner_legend_follows_phase() {
        let scanning = LegendState {
            scanning: true,
            ..state(Screen::Scanner)
        };
        let text = spans_to_text(&build_hotkey_spans(scanning));
        assert!(text.contains("f:Flash"));
        assert!(text.contains("u:Upload"));

        let result = LegendState {
            has_result: true,
            ..state(Screen::Scanner)
        };
        let text = spans_to_text(&build_hotkey_spans(result));
        assert!(text.contains("o:Open"));
        assert!(!text.contains("f:Flash"));
        assert!(!text.contains("u:Upload"));
    }

    #[test]
    fn test_vim_mode_row_navigation() {
        let legend = LegendState {
            vim_mode: true,
            ..state(Screen::Landing)
        };
        assert!(spans_to_text(&build_hotkey_spans(legend)).contains("h/l:Select"));
    }

    #[test]
    fn test_prompt_legend_replaces_screen_keys() {
        let legend = LegendState {
            prompt_open: true,
            ..state(Screen::Scanner)
        };
        let text = spans_to_text(&build_hotkey_spans(legend));
        assert!(text.contains("Esc:Cancel"));
        assert!(!text.contains("Quit"));
    }

    #[test]
    fn test_legend_height_grows_on_narrow_terminal() {
        let legend = state(Screen::Scanner);
        assert_eq!(calculate_legend_height(200, legend), 3);
        assert!(calculate_legend_height(20, legend) > 3);
    }
}
