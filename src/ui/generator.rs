//! Generator screen: text editor on top, QR code and action row below.
//!
//! The code is drawn either as half-block text (black on white, so it scans
//! from any terminal theme) or through a terminal graphics protocol.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use super::buttons;
use crate::QrImage;
use qrkit::logic::{editor, layout};
use qrkit::model::{GeneratorAction, GeneratorFocus, GeneratorModel};
use qrkit::qr::QrMatrix;

const PLACEHOLDER: &str = "Paste a link, write text, WiFi creds...";

/// Editor height in rows, borders included
const EDITOR_HEIGHT: u16 = 6;

pub fn render_generator(
    f: &mut Frame,
    area: Rect,
    generator: &GeneratorModel,
    qr_image: Option<&mut QrImage>,
    font_size: Option<(u16, u16)>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(EDITOR_HEIGHT), Constraint::Min(3)])
        .split(area);

    render_editor(f, chunks[0], generator);

    if let Some(payload) = generator.qr_payload() {
        render_qr_card(f, chunks[1], payload, generator, qr_image, font_size);
    }
}

fn render_editor(f: &mut Frame, area: Rect, generator: &GeneratorModel) {
    let focused = generator.focus == GeneratorFocus::Editor;
    let border_color = if focused { Color::Cyan } else { Color::Gray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Enter Your Content")
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    let (row, col) = editor::cursor_position(&generator.text, generator.cursor);
    // Keep the cursor row visible
    let scroll = row.saturating_sub(inner.height.saturating_sub(1));

    let paragraph = if generator.text.is_empty() {
        Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(generator.text.as_str())
    };
    f.render_widget(paragraph.block(block).scroll((scroll, 0)), area);

    if focused && inner.width > 0 && inner.height > 0 {
        f.set_cursor_position((
            inner.x + col.min(inner.width - 1),
            inner.y + (row - scroll).min(inner.height - 1),
        ));
    }
}

fn render_qr_card(
    f: &mut Frame,
    area: Rect,
    payload: &str,
    generator: &GeneratorModel,
    qr_image: Option<&mut QrImage>,
    font_size: Option<(u16, u16)>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Your QR Code")
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    match qr_image {
        Some(image) => {
            let target = layout::square_in_cells(chunks[0], font_size.unwrap_or((8, 16)));
            f.render_stateful_widget(StatefulImage::default(), target, &mut image.protocol);
        }
        None => render_halfblocks(f, chunks[0], payload),
    }

    let labels: Vec<&str> = generator
        .available_actions()
        .iter()
        .map(|action| action.label())
        .collect();
    buttons::render_buttons(
        f,
        chunks[1],
        &labels,
        generator.selected_action.index(),
        generator.focus == GeneratorFocus::Actions,
    );
}

fn render_halfblocks(f: &mut Frame, area: Rect, payload: &str) {
    let matrix = match QrMatrix::encode(payload) {
        Ok(matrix) => matrix,
        Err(e) => {
            let message = Paragraph::new(format!("Cannot encode: {}", e))
                .style(Style::default().fg(Color::Red))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(message, area);
            return;
        }
    };

    let lines = matrix.to_halfblock_lines();
    let width = lines.first().map_or(0, |l| l.chars().count()) as u16;
    let height = lines.len() as u16;

    if !layout::fits(area, width, height) {
        let message = Paragraph::new(format!(
            "Enlarge the terminal to {}x{} to show the QR code (d still downloads it)",
            width, height
        ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(message, area);
        return;
    }

    let target = layout::centered_rect(area, width, height);
    let code = Paragraph::new(lines.into_iter().map(Line::from).collect::<Vec<_>>())
        .style(Style::default().fg(Color::Black).bg(Color::White));
    f.render_widget(code, target);
}

/// Legend label for a generator action
pub fn action_key(action: GeneratorAction) -> &'static str {
    match action {
        GeneratorAction::Copy => "c",
        GeneratorAction::Download => "d",
        GeneratorAction::Share => "s",
    }
}
