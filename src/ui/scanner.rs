use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::{protocol::StatefulProtocol, StatefulImage};

use super::buttons;
use qrkit::model::{ScanPhase, ScannerAction, ScannerModel};

const INTRO: &str = "Point your camera at a QR code to scan instantly, or upload an image.";

pub fn render_scanner(
    f: &mut Frame,
    area: Rect,
    scanner: &ScannerModel,
    preview: Option<&mut StatefulProtocol>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(intro, chunks[0]);

    match &scanner.result {
        Some(result) => render_result(f, chunks[1], result, scanner.selected_action),
        None => render_camera(f, chunks[1], scanner, preview),
    }
}

fn camera_status_lines(scanner: &ScannerModel) -> Vec<Line<'static>> {
    match (scanner.phase, &scanner.camera) {
        (ScanPhase::Scanning, Some(camera)) => vec![
            Line::from(Span::styled(
                "● Scanning",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Camera: {}", camera.label)),
            Line::from(if scanner.flash_on {
                "Flash: on"
            } else {
                "Flash: off"
            }),
        ],
        _ => vec![
            Line::from(Span::styled(
                "○ Camera idle",
                Style::default().fg(Color::Yellow),
            )),
            Line::from("Press r to retry the camera or u to upload an image"),
        ],
    }
}

fn render_camera(
    f: &mut Frame,
    area: Rect,
    scanner: &ScannerModel,
    preview: Option<&mut StatefulProtocol>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Live Camera")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let status = camera_status_lines(scanner);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(status.len() as u16),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        chunks[0],
    );

    if let Some(protocol) = preview {
        if chunks[1].height > 0 {
            f.render_stateful_widget(StatefulImage::default(), chunks[1], protocol);
        }
    }

    let flash_label = if scanner.flash_on { "Flash Off" } else { "Flash On" };
    buttons::render_buttons(f, chunks[2], &[flash_label, "Upload"], 0, false);
}

fn render_result(f: &mut Frame, area: Rect, result: &str, selected: ScannerAction) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Scan Result")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let text = Paragraph::new(result)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(text, chunks[0]);

    let labels: Vec<&str> = ScannerAction::ALL.iter().map(|a| a.label()).collect();
    buttons::render_buttons(f, chunks[1], &labels, selected.index(), true);
}
