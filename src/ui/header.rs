use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use qrkit::Screen;

fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Landing => "Home",
        Screen::Generator => "Generate QR Code",
        Screen::Scanner => "Scan QR Code",
    }
}

/// Render the title bar with the current screen name
pub fn render_header(f: &mut Frame, area: Rect, screen: Screen) {
    let line = Line::from(vec![
        Span::styled(
            "▣ QR Toolkit",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(screen_title(screen), Style::default().fg(Color::White)),
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}
