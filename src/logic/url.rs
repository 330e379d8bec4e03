//! URL handling for decoded payloads

use url::Url;

/// Parse a decoded payload as an absolute URL that can be handed to an opener.
///
/// Surrounding whitespace is ignored; anything else that does not parse
/// (relative paths, plain words) is rejected.
pub fn parse_openable_url(payload: &str) -> Option<Url> {
    Url::parse(payload.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_url_is_openable() {
        let url = parse_openable_url("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_plain_text_is_not_openable() {
        assert!(parse_openable_url("not a url").is_none());
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert!(parse_openable_url("  https://example.com/path?q=1\n").is_some());
    }

    #[test]
    fn test_other_schemes_are_openable() {
        assert!(parse_openable_url("mailto:someone@example.com").is_some());
        assert!(parse_openable_url("WIFI:S:home;T:WPA;P:secret;;").is_some());
    }

    #[test]
    fn test_relative_path_is_not_openable() {
        assert!(parse_openable_url("/just/a/path").is_none());
        assert!(parse_openable_url("").is_none());
    }
}
