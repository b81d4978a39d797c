//! Target URL validation and normalization.
//!
//! Targets are stored in a canonical form so that equal URLs compare equal:
//! lowercase host, no fragment, no default port. Only http/https schemes are
//! accepted; everything else (including `javascript:` and `data:`) is
//! rejected before it can reach the store.

use url::Url;

/// Errors produced while normalizing a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs can be shortened")]
    UnsupportedScheme,

    #[error("Failed to normalize URL: {0}")]
    NormalizationFailed(String),
}

/// Normalizes a target URL to its canonical form.
///
/// Applied rules: scheme must be http or https; host is lowercased; the
/// fragment is dropped; default ports (80/443) are stripped. Path, query,
/// and any userinfo are preserved as-is.
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let mut url =
        Url::parse(input).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedScheme),
    }

    if let Some(host) = url.host_str() {
        let host_lowercase = host.to_ascii_lowercase();
        url.set_host(Some(&host_lowercase)).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to set normalized host".to_string())
        })?;
    }

    url.set_fragment(None);

    let is_default_port = matches!(
        (url.scheme(), url.port()),
        ("http", Some(80)) | ("https", Some(443))
    );
    if is_default_port {
        url.set_port(None).map_err(|_| {
            UrlNormalizationError::NormalizationFailed("Failed to remove default port".to_string())
        })?;
    }

    Ok(url.to_string())
}
