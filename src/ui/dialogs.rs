use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use qrkit::logic::{editor, layout::centered_rect};
use qrkit::model::PathPromptState;

/// Render the image path prompt used to pick a file to scan
pub fn render_path_prompt(f: &mut Frame, prompt: &PathPromptState) {
    let area = f.area();
    let prompt_area = centered_rect(area, 70, 6);

    let inner_width = prompt_area.width.saturating_sub(2) as usize;
    let cursor_col = editor::cursor_position(&prompt.input, prompt.cursor).1 as usize;
    // Scroll the input horizontally so the cursor stays visible
    let skip = cursor_col.saturating_sub(inner_width.saturating_sub(1));
    let visible: String = skip_columns(&prompt.input, skip);

    let text = vec![
        Line::from(Span::styled(
            "Path to an image containing a QR code:",
            Style::default().fg(Color::Gray),
        )),
        Line::from(visible),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Scan  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Upload Image")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(dialog, prompt_area);

    if prompt_area.width > 2 && prompt_area.height > 2 {
        let x = prompt_area.x + 1 + (cursor_col - skip).min(inner_width.saturating_sub(1)) as u16;
        f.set_cursor_position((x, prompt_area.y + 2));
    }
}

/// Drop leading display columns from a single-line string
fn skip_columns(text: &str, columns: usize) -> String {
    let mut skipped = 0;
    text.chars()
        .skip_while(|c| {
            if skipped >= columns {
                return false;
            }
            skipped += c.width().unwrap_or(0);
            true
        })
        .collect()
}
