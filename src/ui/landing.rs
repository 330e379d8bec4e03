use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::buttons;
use qrkit::logic::layout::centered_rect;
use qrkit::model::LandingChoice;

const TAGLINE: &str = "Scan. Save. Generate.";
const BLURB: &str = "A simple QR toolkit for the terminal. Scan codes from a camera or an image, and generate new ones, all in one place.";
const FOOTER: &str = "QR Toolkit. Built with ❤ for the terminal.";

/// Render the landing hub: tagline, blurb and the Scan / Generate buttons
pub fn render_landing(f: &mut Frame, area: Rect, choice: LandingChoice) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(1)])
        .split(area);

    let hero = centered_rect(chunks[0], 64, 9);
    let hero_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Tagline
            Constraint::Length(4), // Blurb
            Constraint::Length(1), // Buttons
        ])
        .split(hero);

    let tagline = Paragraph::new(Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(tagline, hero_chunks[0]);

    let blurb = Paragraph::new(BLURB)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(blurb, hero_chunks[1]);

    let selected = match choice {
        LandingChoice::Scan => 0,
        LandingChoice::Generate => 1,
    };
    buttons::render_buttons(f, hero_chunks[2], &["Scan", "Generate"], selected, true);

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, chunks[1]);
}
