//! Content fetching from URLs, files, and stdin.
//!
//! [`fetch_url`] performs the single bounded GET behind both extraction
//! operations. The file and stdin readers exist for the CLI.

use std::fs;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

#[cfg(feature = "fetch")]
use crate::FetchError;
use crate::{Result, SiteliftError};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 8;

/// HTTP client configuration for fetching web pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds, covering connect, redirects and body.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: "Mozilla/5.0 (compatible; Sitelift/0.1)".to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Issues exactly one GET, following redirects, bounded by
/// [`FetchConfig::timeout`]. Non-2xx responses are errors. Charset decoding
/// of the body is left to reqwest, which honours the declared
/// `Content-Type` charset and falls back to UTF-8.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> std::result::Result<String, FetchError> {
    let parsed_url = Url::parse(url.trim()).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl(format!(
            "unsupported scheme '{}' (expected http or https)",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(FetchError::Network)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching source");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| classify(e, config))?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url = %response.url(), status = status.as_u16(), "source answered with non-success status");
        return Err(FetchError::Status { status: status.as_u16(), url: response.url().to_string() });
    }

    let content = response.text().await.map_err(|e| {
        if e.is_timeout() { FetchError::Timeout { timeout: config.timeout } } else { FetchError::Body(e.to_string()) }
    })?;

    tracing::debug!(bytes = content.len(), "fetched source");
    Ok(content)
}

#[cfg(feature = "fetch")]
fn classify(err: reqwest::Error, config: &FetchConfig) -> FetchError {
    if err.is_timeout() {
        tracing::warn!(timeout = config.timeout, "source fetch timed out");
        FetchError::Timeout { timeout: config.timeout }
    } else {
        tracing::warn!(error = %err, "source fetch failed");
        FetchError::Network(err)
    }
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SiteliftError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SiteliftError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SiteliftError::from)?;

    Ok(buffer)
}
