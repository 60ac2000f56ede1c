//! URL validation and normalization.

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::FetchError;

/// Validates and normalizes a URL.
///
/// Adds an `https://` prefix if the URL has no http(s) scheme, then checks
/// that the result parses and uses http or https. URLs longer than
/// `MAX_URL_LENGTH` (before or after normalization) are rejected.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` naming the reason for rejection.
pub fn validate_and_normalize_url(url: &str) -> Result<String, FetchError> {
    let url = url.trim();
    let invalid = |reason: String| FetchError::InvalidUrl {
        url: url.to_string(),
        reason,
    };

    if url.is_empty() {
        return Err(invalid("URL is empty".to_string()));
    }

    if url.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length ({} > {})",
            url.len(),
            MAX_URL_LENGTH
        )));
    }

    // A scheme other than http(s) is rejected below, not prefixed
    let has_scheme = url.contains("://");
    let normalized = if has_scheme {
        url.to_string()
    } else {
        format!("https://{url}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(format!(
            "exceeds maximum length after normalization ({} > {})",
            normalized.len(),
            MAX_URL_LENGTH
        )));
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Ok(normalized),
            other => Err(invalid(format!("unsupported scheme '{other}'"))),
        },
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::validate_and_normalize_url;
    use crate::error_handling::FetchError;

    #[test]
    fn test_validate_and_normalize_url_adds_https() {
        let result = validate_and_normalize_url("example.com").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_https() {
        let result = validate_and_normalize_url("https://example.com").unwrap();
        assert_eq!(result, "https://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_preserves_http() {
        let result = validate_and_normalize_url("http://example.com").unwrap();
        assert_eq!(result, "http://example.com");
    }

    #[test]
    fn test_validate_and_normalize_url_with_path() {
        let result = validate_and_normalize_url("example.com/path?query=value").unwrap();
        assert_eq!(result, "https://example.com/path?query=value");
    }

    #[test]
    fn test_validate_and_normalize_url_with_port() {
        let result = validate_and_normalize_url("localhost:8080/page").unwrap();
        assert_eq!(result, "https://localhost:8080/page");
    }

    #[test]
    fn test_validate_and_normalize_url_trims_whitespace() {
        let result = validate_and_normalize_url("  https://example.com/  ").unwrap();
        assert_eq!(result, "https://example.com/");
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_unsupported_scheme() {
        let err = validate_and_normalize_url("ftp://example.com").unwrap_err();
        match err {
            FetchError::InvalidUrl { url, reason } => {
                assert_eq!(url, "ftp://example.com");
                assert!(reason.contains("ftp"), "reason was: {reason}");
            }
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_invalid_url() {
        assert!(validate_and_normalize_url("not a valid url!!!").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_empty() {
        assert!(validate_and_normalize_url("").is_err());
        assert!(validate_and_normalize_url("   ").is_err());
    }

    #[test]
    fn test_validate_and_normalize_url_rejects_too_long() {
        let long = format!("https://example.com/{}", "a".repeat(3000));
        assert!(validate_and_normalize_url(&long).is_err());
    }
}
