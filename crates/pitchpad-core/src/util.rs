//! Small text and time helpers shared by the config, auth, and store code.

/// Longest error-body excerpt we keep; backend stack traces get cut here.
const ERROR_EXCERPT_CHARS: usize = 180;

/// Trim optional text, collapsing blank values to `None`.
///
/// Environment variables and form fields arrive padded or empty; callers
/// only want text that actually says something.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Whether a configured endpoint carries an explicit `http://` or `https://` scheme.
pub fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

/// Trim a response body down to a short excerpt suitable for an error message.
pub fn compact_text(value: &str) -> String {
    value.trim().chars().take(ERROR_EXCERPT_CHARS).collect()
}

/// Seconds since the Unix epoch, used for session expiry checks.
pub fn unix_timestamp_now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_text_option_drops_blank_values() {
        assert_eq!(normalize_text_option(None), None);
        assert_eq!(normalize_text_option(Some(String::new())), None);
        assert_eq!(normalize_text_option(Some("   ".to_string())), None);
    }

    #[test]
    fn normalize_text_option_trims_padding() {
        assert_eq!(
            normalize_text_option(Some(" https://api.pitchpad.app ".to_string())),
            Some("https://api.pitchpad.app".to_string())
        );
    }

    #[test]
    fn is_http_url_requires_explicit_scheme() {
        assert!(is_http_url("http://localhost:8080"));
        assert!(is_http_url("https://api.pitchpad.app"));
        assert!(!is_http_url("ftp://api.pitchpad.app"));
        assert!(!is_http_url("api.pitchpad.app"));
    }

    #[test]
    fn compact_text_trims_and_caps_excerpts() {
        assert_eq!(compact_text("  oops  "), "oops");
        let long = "x".repeat(400);
        assert_eq!(compact_text(&long).chars().count(), ERROR_EXCERPT_CHARS);
    }
}
