use anyhow::Error;

/// Format an error for the debug log - walk the chain to the root cause
pub fn format_error_message(error: &Error) -> String {
    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Whether a toast message should be styled as an error
pub fn is_error_message(message: &str) -> bool {
    message.starts_with("Error:")
}

/// Build an error toast message
pub fn error_toast(message: &str) -> String {
    format!("Error: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_shows_root_cause() {
        // Context wrappers are skipped in favor of the root cause
        let inner = anyhow::anyhow!("permission denied");
        let outer = inner.context("Failed to write qr-code.png");
        assert_eq!(format_error_message(&outer), "permission denied");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_error_toast_is_detected() {
        assert!(is_error_message(&error_toast("Not a valid URL")));
        assert!(!is_error_message("Text copied!"));
    }
}
