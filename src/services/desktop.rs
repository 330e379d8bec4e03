//! Desktop integration through external commands
//!
//! Clipboard, URL opening and sharing are delegated to programs on the host
//! (pbcopy, xdg-open, a user-configured share tool). Open and share commands
//! are spawned in the background and never waited on, so slow GUI apps do not
//! block the UI. Clipboard tools exit as soon as stdin closes, so their exit
//! status is checked.

use anyhow::{Context, Result};
use std::io::Write;
use std::process::{Command, Stdio};
use url::Url;

use crate::config::Config;
use crate::logic::platform;

/// Host capabilities used by the generator and scanner screens
pub trait Desktop {
    /// Put text on the system clipboard
    fn copy_text(&self, text: &str) -> Result<()>;

    /// Open a URL in the default handler
    fn open_url(&self, url: &Url) -> Result<()>;

    /// Hand text to the system share facility
    fn share_text(&self, text: &str) -> Result<()>;

    /// Whether sharing is available at all
    fn can_share(&self) -> bool;
}

/// [`Desktop`] backed by shell commands
#[derive(Debug, Clone)]
pub struct CommandDesktop {
    clipboard_command: String,
    open_command: String,
    share_command: Option<String>,
}

impl CommandDesktop {
    pub fn new(clipboard_command: String, open_command: String, share_command: Option<String>) -> Self {
        Self {
            clipboard_command,
            open_command,
            share_command,
        }
    }

    /// Configured commands, falling back to the platform defaults
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config
                .clipboard_command
                .clone()
                .unwrap_or_else(|| platform::clipboard_command().to_string()),
            config
                .open_command
                .clone()
                .unwrap_or_else(|| platform::open_command().to_string()),
            config
                .share_command
                .clone()
                .filter(|cmd| !cmd.trim().is_empty()),
        )
    }
}

fn build_command(command_line: &str) -> Result<Command> {
    let (program, args) = platform::split_command(command_line)
        .with_context(|| format!("Empty command '{}'", command_line))?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

/// Spawn with `arg` appended, output discarded
fn spawn_with_arg(command_line: &str, arg: &str) -> Result<()> {
    build_command(command_line)?
        .arg(arg)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to execute '{}'", command_line))?;
    tracing::debug!("Spawned {} {}", command_line, arg);
    Ok(())
}

impl Desktop for CommandDesktop {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut child = build_command(&self.clipboard_command)?
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to execute '{}'", self.clipboard_command))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .context("Failed to write to clipboard command")?;
            // Dropping stdin closes it, signalling EOF
        }

        let status = child
            .wait()
            .with_context(|| format!("Failed to wait for '{}'", self.clipboard_command))?;
        if !status.success() {
            anyhow::bail!("'{}' exited with {}", self.clipboard_command, status);
        }
        tracing::debug!(
            "Copied {} bytes via {}",
            text.len(),
            self.clipboard_command
        );
        Ok(())
    }

    fn open_url(&self, url: &Url) -> Result<()> {
        spawn_with_arg(&self.open_command, url.as_str())
    }

    fn share_text(&self, text: &str) -> Result<()> {
        let Some(share) = &self.share_command else {
            anyhow::bail!("share_command not configured");
        };
        spawn_with_arg(share, text)
    }

    fn can_share(&self) -> bool {
        self.share_command.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unconfigured() {
        let desktop = CommandDesktop::from_config(&Config::default());
        assert_eq!(desktop.clipboard_command, platform::clipboard_command());
        assert_eq!(desktop.open_command, platform::open_command());
        assert!(!desktop.can_share());
    }

    #[test]
    fn test_blank_share_command_is_unsupported() {
        let config = Config {
            share_command: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(!CommandDesktop::from_config(&config).can_share());
    }

    #[test]
    fn test_share_without_command_fails() {
        let desktop = CommandDesktop::new("cat".into(), "true".into(), None);
        assert!(desktop.share_text("hi").is_err());
    }

    #[test]
    fn test_missing_program_is_error() {
        let desktop = CommandDesktop::new(
            "qrkit-no-such-clipboard-tool".into(),
            "qrkit-no-such-opener".into(),
            None,
        );
        assert!(desktop.copy_text("hi").is_err());
        let url = Url::parse("https://example.com").unwrap();
        assert!(desktop.open_url(&url).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_reports_clipboard_exit_status() {
        let ok = CommandDesktop::new("cat".into(), "true".into(), None);
        assert!(ok.copy_text("hello").is_ok());

        // Reads all of stdin, then exits 1 like a clipboard tool without a display
        let failing = CommandDesktop::new("grep -q qrkit-never-matches".into(), "true".into(), None);
        assert!(failing.copy_text("hello").is_err());
    }
}
