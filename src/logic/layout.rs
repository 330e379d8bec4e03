//! Layout calculations
//!
//! Pure sizing helpers used by the screen renderers.

use ratatui::layout::Rect;

/// A rect of at most `width` x `height` centred in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Whether a block of text fits inside an area (borders excluded)
pub fn fits(area: Rect, content_width: u16, content_height: u16) -> bool {
    area.width >= content_width && area.height >= content_height
}

/// Width of a row of buttons, each padded with one space and separated by two
pub fn button_row_width(labels: &[&str]) -> u16 {
    let labels_width: usize = labels
        .iter()
        .map(|l| unicode_width::UnicodeWidthStr::width(*l) + 2)
        .sum();
    let gaps = labels.len().saturating_sub(1) * 2;
    (labels_width + gaps) as u16
}

/// Largest visually square rect centred in `area`, given the terminal font
/// cell size in pixels (width, height)
pub fn square_in_cells(area: Rect, font_size: (u16, u16)) -> Rect {
    let (font_w, font_h) = (u32::from(font_size.0.max(1)), u32::from(font_size.1.max(1)));
    // Pixel edge limited by both dimensions
    let edge_px = (u32::from(area.width) * font_w).min(u32::from(area.height) * font_h);
    let width = (edge_px / font_w) as u16;
    let height = (edge_px / font_h) as u16;
    centered_rect(area, width, height)
}
