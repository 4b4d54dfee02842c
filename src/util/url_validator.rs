use thiserror::Error;
use url::Url;

/// Errors that can occur while validating the FAQ source URL.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL has no host component.
    #[error("URL has no host")]
    MissingHost,
}

/// Validates the URL the FAQ list is fetched from.
///
/// Unlike URLs taken from untrusted content, the source URL comes from the
/// user's own config or command line, and FAQ backends commonly run on the
/// same machine. Localhost and private addresses are therefore accepted; only
/// the scheme and the presence of a host are enforced.
///
/// # Examples
///
/// ```
/// use faqview::util::validate_source_url;
///
/// let url = validate_source_url("http://localhost:8080/api/faq/all").unwrap();
/// assert_eq!(url.port(), Some(8080));
///
/// assert!(validate_source_url("file:///etc/passwd").is_err());
/// assert!(validate_source_url("not a url").is_err());
/// ```
pub fn validate_source_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str.trim())?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlValidationError::MissingHost),
    }
}
