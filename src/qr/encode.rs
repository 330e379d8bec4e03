//! QR encoding and rendering.

use anyhow::{bail, Context, Result};
use image::{DynamicImage, GrayImage, ImageFormat, Luma};
use qrcode::{Color, QrCode};

/// Light modules drawn around the symbol so scanners can find it
pub const QUIET_ZONE: usize = 4;

/// Module matrix of an encoded payload (true = dark module)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrMatrix {
    width: usize,
    modules: Vec<bool>,
}

impl QrMatrix {
    /// Encode a payload. Empty payloads are rejected since nothing is rendered for them.
    pub fn encode(payload: &str) -> Result<Self> {
        if payload.is_empty() {
            bail!("Nothing to encode");
        }

        let code = QrCode::new(payload.as_bytes()).context("QR encode error")?;
        let width = code.width();
        let modules = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();

        Ok(Self { width, modules })
    }

    /// Number of modules per side, quiet zone excluded
    pub fn width(&self) -> usize {
        self.width
    }

    /// Module color at (x, y); anything outside the symbol is light
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.width {
            return false;
        }
        self.modules
            .get(y * self.width + x)
            .copied()
            .unwrap_or(false)
    }

    /// Render as terminal lines where each character covers two vertical modules.
    ///
    /// Intended to be drawn dark-on-light (black foreground, white background).
    pub fn to_halfblock_lines(&self) -> Vec<String> {
        let padded = self.width + QUIET_ZONE * 2;
        let module = |x: usize, y: usize| -> bool {
            x >= QUIET_ZONE
                && y >= QUIET_ZONE
                && self.is_dark(x - QUIET_ZONE, y - QUIET_ZONE)
        };

        (0..padded)
            .step_by(2)
            .map(|y| {
                (0..padded)
                    .map(|x| match (module(x, y), module(x, y + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect()
    }

    /// Pixels per module for a requested canvas size (never below 1)
    pub fn module_scale(&self, target_size: u32) -> u32 {
        let modules = self.width as u32;
        (target_size / modules.max(1)).max(1)
    }

    /// Rasterize to a grayscale image including the quiet zone
    pub fn to_image(&self, target_size: u32) -> GrayImage {
        let scale = self.module_scale(target_size);
        let quiet = QUIET_ZONE as u32 * scale;
        let edge = self.width as u32 * scale + quiet * 2;

        let mut img = GrayImage::from_pixel(edge, edge, Luma([255u8]));
        for y in 0..self.width {
            for x in 0..self.width {
                if !self.is_dark(x, y) {
                    continue;
                }
                let px = quiet + x as u32 * scale;
                let py = quiet + y as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(px + dx, py + dy, Luma([0u8]));
                    }
                }
            }
        }
        img
    }

    /// Encode the rasterized code as PNG bytes
    pub fn to_png(&self, target_size: u32) -> Result<Vec<u8>> {
        let mut png_bytes = Vec::new();
        DynamicImage::ImageLuma8(self.to_image(target_size))
            .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
            .context("PNG encode error")?;
        Ok(png_bytes)
    }
}
