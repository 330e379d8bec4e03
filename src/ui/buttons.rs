use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use qrkit::logic::layout::button_row_width;

/// Styled spans for a row of buttons; the selected one is highlighted when the row has focus
pub fn button_spans(labels: &[&str], selected: usize, focused: bool) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(labels.len() * 2);
    for (idx, label) in labels.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if idx == selected && focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if idx == selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    spans
}

/// Render a centred row of buttons on the first line of `area`
pub fn render_buttons(f: &mut Frame, area: Rect, labels: &[&str], selected: usize, focused: bool) {
    if area.height == 0 {
        return;
    }
    let width = button_row_width(labels).min(area.width);
    let row = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(button_spans(labels, selected, focused))),
        row,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_spans_pad_labels() {
        let spans = button_spans(&["Copy", "Open"], 1, true);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Copy    Open ");
        assert_eq!(text.len() as u16, button_row_width(&["Copy", "Open"]));
    }

    #[test]
    fn test_selected_button_is_highlighted_only_with_focus() {
        let focused = button_spans(&["A", "B"], 0, true);
        assert_eq!(focused[0].style.bg, Some(Color::Cyan));

        let unfocused = button_spans(&["A", "B"], 0, false);
        assert_eq!(unfocused[0].style.bg, None);
    }
}
