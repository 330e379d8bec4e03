//! QR decoding of camera frames and image files.

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage};
use std::path::Path;

use crate::logic::region::{detection_region, Region};

/// Decode the first readable QR code in a grayscale image
pub fn decode_luma(img: &GrayImage) -> Option<String> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return None;
    }

    let mut prepared =
        rqrr::PreparedImage::prepare_from_greyscale(width as usize, height as usize, |x, y| {
            img.get_pixel(x as u32, y as u32)[0]
        });

    prepared
        .detect_grids()
        .into_iter()
        .find_map(|grid| match grid.decode() {
            Ok((_meta, content)) => Some(content),
            Err(e) => {
                tracing::debug!("QR grid found but not decodable: {:?}", e);
                None
            }
        })
}

/// Decode a full image, failing when no code can be read
pub fn decode_image(img: &DynamicImage) -> Result<String> {
    decode_luma(&img.to_luma8()).context("No QR code found")
}

/// Decode only the centred detection region of a camera frame
pub fn decode_in_region(frame: &DynamicImage, box_edge: u32) -> Option<String> {
    let Region {
        x,
        y,
        width,
        height,
    } = detection_region(frame.width(), frame.height(), box_edge);
    decode_luma(&frame.crop_imm(x, y, width, height).to_luma8())
}

/// One-shot decode of an image file
pub fn decode_file(path: &Path) -> Result<String> {
    let img = image::open(path)
        .with_context(|| format!("Failed to load image {}", path.display()))?;
    decode_image(&img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrMatrix;
    use image::Luma;

    fn qr_frame(payload: &str) -> DynamicImage {
        DynamicImage::ImageLuma8(QrMatrix::encode(payload).unwrap().to_image(200))
    }

    #[test]
    fn test_decodes_generated_code() {
        let text = decode_image(&qr_frame("https://example.com")).unwrap();
        assert_eq!(text, "https://example.com");
    }

    #[test]
    fn test_blank_image_has_no_code() {
        let blank = DynamicImage::ImageLuma8(GrayImage::from_pixel(120, 120, Luma([255u8])));
        assert!(decode_image(&blank).is_err());
    }

    #[test]
    fn test_region_decode_on_small_frame() {
        // Frame smaller than the detection box: the whole frame is searched
        let frame = qr_frame("hello");
        assert!(frame.width() < 400);
        assert_eq!(decode_in_region(&frame, 400).as_deref(), Some("hello"));
    }

    #[test]
    fn test_missing_file_is_error() {
        assert!(decode_file(Path::new("/no/such/qr.png")).is_err());
    }
}
