//! QR codec wrappers
//!
//! Thin layer over the delegated libraries:
//! - encode: `qrcode` builds the module matrix, rendered to terminal text or PNG
//! - decode: `rqrr` finds and decodes codes in camera frames and image files

pub mod decode;
pub mod encode;

pub use decode::{decode_file, decode_image, decode_in_region};
pub use encode::QrMatrix;
