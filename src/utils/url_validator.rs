//! Target URL validation for the shortening endpoints.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must not contain control characters or surrounding whitespace")]
    UnsafeCharacters,
}

/// Checks that `input` is an absolute `http` or `https` URL.
///
/// The input itself is not rewritten: the registry stores exactly what the
/// caller submitted, so `https://EXAMPLE.com` and `https://example.com` are
/// distinct targets. This keeps reverse-mapping keys stable for data written
/// before this service existed.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for malformed or relative URLs.
/// Returns [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// such as `javascript:`, `data:` or `ftp:`.
/// Returns [`UrlValidationError::UnsafeCharacters`] for input with ASCII control
/// characters or leading/trailing whitespace. The parser strips those silently,
/// but the stored string would not be a valid `Location` header.
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim() != input || input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::UnsafeCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedProtocol),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("http://example.com").is_ok());
        assert!(validate_target_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_target_url("HTTPS://EXAMPLE.COM:8443/Path").is_ok());
    }

    #[test]
    fn test_rejects_other_schemes() {
        for input in [
            "ftp://example.com/file",
            "javascript:alert(1)",
            "data:text/plain,hello",
            "mailto:someone@example.com",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::UnsupportedProtocol)
                ),
                "'{}' should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_control_characters_and_padding() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/\r",
            "https://exa\u{7f}mple.com",
            " https://example.com",
            "https://example.com ",
        ] {
            assert!(
                matches!(
                    validate_target_url(input),
                    Err(UrlValidationError::UnsafeCharacters)
                ),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(matches!(
            validate_target_url("example.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_target_url("/local/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(validate_target_url("").is_err());
    }
}
