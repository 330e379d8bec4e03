use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use qrkit::logic::errors::is_error_message;

/// Toast rectangle: sized to the message, centred near the top of `area`
pub fn toast_area(area: Rect, message: &str) -> Rect {
    // Allow for longer messages, up to 80 columns
    let max_width = (area.width as usize).min(80);
    let toast_width = (message.width() + 6).min(max_width) as u16;
    let toast_height = 4u16.min(area.height);

    let toast_x = (area.width.saturating_sub(toast_width)) / 2;
    let toast_y = 3u16.min(area.height.saturating_sub(toast_height));

    Rect {
        x: area.x + toast_x,
        y: area.y + toast_y,
        width: toast_width,
        height: toast_height,
    }
}

/// Render a toast notification (brief pop-up message)
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);

    // Clear the area first to prevent background bleed-through
    f.render_widget(Clear, toast_area);

    // Detect error messages and use different styling
    let (icon, color) = if is_error_message(message) {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default()),
    ]);

    let toast_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast_text = Paragraph::new(vec![toast_line])
        .block(toast_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast_text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_fits_message() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_area(area, "Text copied!");
        assert_eq!(rect.width, 12 + 6);
        assert_eq!(rect.x, (100 - 18) / 2);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_long_toast_is_capped() {
        let area = Rect::new(0, 0, 60, 30);
        let rect = toast_area(area, &"x".repeat(200));
        assert_eq!(rect.width, 60);
    }

    #[test]
    fn test_toast_on_short_terminal() {
        let area = Rect::new(0, 0, 40, 3);
        let rect = toast_area(area, "QR code scanned!");
        assert!(rect.y + rect.height <= 3);
    }
}
