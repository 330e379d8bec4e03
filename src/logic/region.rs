//! Detection region calculation
//!
//! Only a centred square of each camera frame is searched for a code,
//! which keeps per-frame decoding cheap and matches the on-screen viewfinder.

/// Pixel rectangle inside a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Centre a `box_edge` square in a frame, clamped to the frame bounds
///
/// # Examples
/// ```
/// use qrkit::logic::region::{detection_region, Region};
///
/// assert_eq!(
///     detection_region(640, 480, 250),
///     Region { x: 195, y: 115, width: 250, height: 250 }
/// );
/// ```
pub fn detection_region(frame_width: u32, frame_height: u32, box_edge: u32) -> Region {
    let width = box_edge.min(frame_width);
    let height = box_edge.min(frame_height);
    Region {
        x: (frame_width - width) / 2,
        y: (frame_height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_is_centered() {
        let r = detection_region(1280, 720, 250);
        assert_eq!(r.x + r.width / 2, 640);
        assert_eq!(r.y + r.height / 2, 360);
    }

    #[test]
    fn test_region_clamped_to_small_frame() {
        let r = detection_region(200, 100, 250);
        assert_eq!(r, Region { x: 0, y: 0, width: 200, height: 100 });
    }

    #[test]
    fn test_zero_box_is_empty() {
        let r = detection_region(640, 480, 0);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 0);
    }
}
