//! Download file naming

use std::path::{Path, PathBuf};

pub const DOWNLOAD_STEM: &str = "qr-code";
pub const DOWNLOAD_EXT: &str = "png";

/// Pick a file path in `dir` that does not collide with an existing file.
///
/// Follows browser download naming: `qr-code.png`, then `qr-code (1).png`,
/// `qr-code (2).png`, ...
pub fn unique_download_path(dir: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    let first = dir.join(format!("{}.{}", DOWNLOAD_STEM, DOWNLOAD_EXT));
    if !exists(&first) {
        return first;
    }

    (1u32..)
        .map(|n| dir.join(format!("{} ({}).{}", DOWNLOAD_STEM, n, DOWNLOAD_EXT)))
        .find(|candidate| !exists(candidate))
        .unwrap_or(first)
}
