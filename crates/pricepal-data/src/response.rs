//! Buffered HTTP responses.

use crate::FetchError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// How much of an error body is kept in [`FetchError::Http`].
const ERROR_BODY_LIMIT: usize = 200;

/// A fully read HTTP response.
///
/// The body is read before status or decode checks so that transport,
/// status and decode failures surface as distinct [`FetchError`] variants.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers, keys lowercased.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response. Header names are lowercased.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Parse(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            return Ok(self);
        }

        let mut message: String = String::from_utf8_lossy(&self.body)
            .chars()
            .take(ERROR_BODY_LIMIT)
            .collect();
        if message.trim().is_empty() {
            message = "empty body".to_string();
        }
        Err(FetchError::Http {
            status: self.status,
            message,
        })
    }
}
