//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to the product API.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Short failure class for log fields: `network`, `status` or `decode`.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(_) | FetchError::Timeout | FetchError::InvalidUrl(_) => "network",
            FetchError::Http { .. } => "status",
            FetchError::Parse(_) => "decode",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            FetchError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Parse(e.to_string())
    }
}
