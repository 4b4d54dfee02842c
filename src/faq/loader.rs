use super::FaqRecord;
use crate::util::validate_source_url;
use futures::StreamExt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Largest FAQ payload accepted, over HTTP or from disk.
pub const MAX_RESPONSE_SIZE: usize = 5 * 1024 * 1024; // 5MB

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    #[error("Invalid UTF-8 in response")]
    InvalidUtf8,
    #[error("Invalid source URL: {0}")]
    InvalidUrl(#[from] crate::util::UrlValidationError),
    #[error("Malformed FAQ list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Failed to read FAQ file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch the complete FAQ list with a single GET request.
///
/// No query parameters are sent; filtering happens client-side over the full
/// set. There is no retry: a failed load is final for this run.
pub async fn fetch_faqs(
    client: &reqwest::Client,
    source_url: &str,
    timeout: Duration,
) -> Result<Vec<FaqRecord>, LoadError> {
    let url = validate_source_url(source_url)?;

    tracing::debug!(url = %url, timeout_secs = timeout.as_secs(), "Fetching FAQ list");

    let response = tokio::time::timeout(timeout, client.get(url.as_str()).send())
        .await
        .map_err(|_| LoadError::Timeout(timeout.as_secs()))?
        .map_err(LoadError::Network)?;

    if !response.status().is_success() {
        return Err(LoadError::HttpStatus(response.status().as_u16()));
    }

    let body = tokio::time::timeout(timeout, read_limited_text(response, MAX_RESPONSE_SIZE))
        .await
        .map_err(|_| LoadError::Timeout(timeout.as_secs()))??;

    let records = parse_records(&body)?;
    tracing::info!(url = %url, count = records.len(), "Fetched FAQ list");
    Ok(records)
}

/// Load the FAQ list from a local JSON file in the same format the endpoint serves.
pub async fn load_file(path: &Path) -> Result<Vec<FaqRecord>, LoadError> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > MAX_RESPONSE_SIZE as u64 {
        return Err(LoadError::ResponseTooLarge(MAX_RESPONSE_SIZE));
    }

    let bytes = tokio::fs::read(path).await?;
    let body = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8)?;
    let records = parse_records(&body)?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded FAQ list from file");
    Ok(records)
}

/// Decode a JSON array of FAQ records, preserving order.
pub fn parse_records(body: &str) -> Result<Vec<FaqRecord>, LoadError> {
    Ok(serde_json::from_str(body)?)
}

async fn read_limited_text(response: reqwest::Response, limit: usize) -> Result<String, LoadError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(LoadError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(LoadError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(LoadError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8)
}
