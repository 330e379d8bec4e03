use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How the generated QR code is drawn in the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum QrRenderMode {
    /// Unicode half blocks, works in every terminal
    #[default]
    Blocks,
    /// Terminal graphics protocol (kitty, iTerm2, sixel) via ratatui-image
    Image,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,

    /// Command that receives text on stdin and puts it on the clipboard
    #[serde(default)]
    pub clipboard_command: Option<String>,

    /// Command used to open decoded URLs
    #[serde(default)]
    pub open_command: Option<String>,

    /// Command used to share a payload; the text is passed as the last argument
    #[serde(default)]
    pub share_command: Option<String>,

    /// Where downloaded QR images are written
    #[serde(default)]
    pub download_dir: Option<PathBuf>,

    /// Target edge of the exported PNG in pixels (quiet zone excluded)
    #[serde(default = "default_qr_size")]
    pub qr_size: u32,

    #[serde(default)]
    pub qr_render: QrRenderMode,

    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,

    /// Show the live camera feed while scanning
    #[serde(default)]
    pub camera_preview: bool,

    #[serde(default = "default_scan_fps")]
    pub scan_fps: u32,

    /// Edge of the square detection region in camera pixels
    #[serde(default = "default_scan_box")]
    pub scan_box: u32,
}

fn default_qr_size() -> u32 {
    200
}

fn default_image_protocol() -> String {
    "auto".to_string()
}

fn default_scan_fps() -> u32 {
    10
}

fn default_scan_box() -> u32 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            clipboard_command: None,
            open_command: None,
            share_command: None,
            download_dir: None,
            qr_size: default_qr_size(),
            qr_render: QrRenderMode::default(),
            image_protocol: default_image_protocol(),
            camera_preview: false,
            scan_fps: default_scan_fps(),
            scan_box: default_scan_box(),
        }
    }
}

impl Config {
    /// Parse a YAML config document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" config
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Directory used for downloads when none is configured
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config exists anywhere; the app then runs on
/// defaults. An explicit `--config` path that does not exist is an error.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/qrkit/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("qrkit").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
