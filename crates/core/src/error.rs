//! Error types for sitelift operations.
//!
//! Only the outbound fetch can fail. Everything after a document has been
//! fetched is total: missing tags, empty text, and malformed markup degrade
//! to `None` or empty collections instead of producing an error.
//!
//! # Example
//!
//! ```rust
//! use sitelift_core::{FetchError, SiteliftError};
//!
//! let err: SiteliftError = FetchError::Timeout { timeout: 8 }.into();
//! assert!(err.is_fetch());
//! assert!(err.to_string().contains("8 seconds"));
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// A classified failure of the single outbound GET.
///
/// Every variant's `Display` output carries the upstream cause so callers can
/// surface it verbatim (the HTTP service embeds it in a 400 response).
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input could not be parsed as an absolute http(s) URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} for url ({url})")]
    Status { status: u16, url: String },

    /// DNS, connect, TLS, redirect-loop and other transport failures.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The response body could not be read or decoded as text.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl FetchError {
    /// Whether this failure was caused by the timeout elapsing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}

/// Main error type for sitelift operations.
#[derive(Error, Debug)]
pub enum SiteliftError {
    /// The outbound fetch failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// File not found.
    ///
    /// Returned when attempting to read a local HTML file that doesn't exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors for file and stdin operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output serialization errors.
    #[error("Failed to serialize output: {0}")]
    Serialize(String),
}

impl SiteliftError {
    /// Whether this error originated in the outbound fetch.
    pub fn is_fetch(&self) -> bool {
        matches!(self, SiteliftError::Fetch(_))
    }
}

impl From<serde_json::Error> for SiteliftError {
    fn from(err: serde_json::Error) -> Self {
        SiteliftError::Serialize(err.to_string())
    }
}

/// Result type alias for SiteliftError.
pub type Result<T> = std::result::Result<T, SiteliftError>;
