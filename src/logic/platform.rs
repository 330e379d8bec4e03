//! Default external commands per platform
//!
//! Used when the config does not name a clipboard or opener command.

/// Clipboard command for an OS (as in `std::env::consts::OS`)
pub fn default_clipboard_command(os: &str, wayland: bool) -> &'static str {
    match os {
        "macos" => "pbcopy",
        "windows" => "clip",
        _ if wayland => "wl-copy",
        _ => "xclip -selection clipboard",
    }
}

/// URL opener command for an OS
pub fn default_open_command(os: &str) -> &'static str {
    match os {
        "macos" => "open",
        "windows" => "explorer",
        _ => "xdg-open",
    }
}

/// Clipboard command for the running system
pub fn clipboard_command() -> &'static str {
    default_clipboard_command(
        std::env::consts::OS,
        std::env::var_os("WAYLAND_DISPLAY").is_some(),
    )
}

/// URL opener command for the running system
pub fn open_command() -> &'static str {
    default_open_command(std::env::consts::OS)
}

/// Split a configured command line into program and arguments
pub fn split_command(command: &str) -> Option<(String, Vec<String>)> {
    let mut parts = command.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_defaults() {
        assert_eq!(default_clipboard_command("macos", false), "pbcopy");
        assert_eq!(default_clipboard_command("linux", true), "wl-copy");
        assert_eq!(default_clipboard_command("linux", false), "xclip -selection clipboard");
    }

    #[test]
    fn test_open_defaults() {
        assert_eq!(default_open_command("macos"), "open");
        assert_eq!(default_open_command("freebsd"), "xdg-open");
    }

    #[test]
    fn test_split_command() {
        let (program, args) = split_command("xclip -selection clipboard").unwrap();
        assert_eq!(program, "xclip");
        assert_eq!(args, vec!["-selection", "clipboard"]);
        assert!(split_command("   ").is_none());
    }
}
