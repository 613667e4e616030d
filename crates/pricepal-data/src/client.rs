//! Thin GET client over `reqwest`.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::{FetchError, Response, TimeoutConfig};

/// Default `User-Agent` sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("pricepal/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the product API.
///
/// Relative paths are resolved against the base URL. Cloning is cheap; the
/// underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: reqwest::Client,
    base_url: String,
}

impl FetchClient {
    /// Start building a client for `base_url`.
    pub fn builder(base_url: impl Into<String>) -> FetchClientBuilder {
        FetchClientBuilder::new(base_url)
    }

    /// Build a client with default timeouts and headers.
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        Self::builder(base_url).build()
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Send a GET request and buffer the response.
    ///
    /// Non-2xx statuses are returned as a [`Response`], not an error; use
    /// [`Response::error_for_status`] to reject them.
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, FetchError> {
        let url = self.url(path);
        tracing::debug!(%url, ?query, "GET");

        let resp = self.client.get(&url).query(query).send().await?;

        let status = resp.status().as_u16();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .filter_map(|(k, v)| Some((k.as_str().to_string(), v.to_str().ok()?.to_string())))
            .collect();
        let body = resp.bytes().await?.to_vec();

        tracing::debug!(%url, status, bytes = body.len(), "response received");
        Ok(Response::new(status, headers, body))
    }

    /// GET, reject non-2xx statuses and decode the body as JSON.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        self.get(path, query).await?.error_for_status()?.json()
    }
}

/// Builder for [`FetchClient`].
#[derive(Debug, Clone)]
pub struct FetchClientBuilder {
    base_url: String,
    timeout: TimeoutConfig,
    user_agent: String,
    default_headers: Vec<(String, String)>,
}

impl FetchClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: TimeoutConfig::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_headers: Vec::new(),
        }
    }

    /// Set connect and total timeouts.
    pub fn with_timeout(mut self, timeout: TimeoutConfig) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FetchClient, FetchError> {
        let base_url = self.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(FetchError::InvalidUrl(base_url));
        }

        let mut headers = HeaderMap::new();
        for (key, value) in &self.default_headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| FetchError::Request(format!("invalid header {}: {}", key, e)))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| FetchError::Request(format!("invalid header {}: {}", key, e)))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .connect_timeout(self.timeout.connect)
            .timeout(self.timeout.total)
            .user_agent(self.user_agent)
            .default_headers(headers)
            .build()?;

        Ok(FetchClient { client, base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = FetchClient::new("https://dummyjson.com/").unwrap();
        assert_eq!(
            client.url("/products/search"),
            "https://dummyjson.com/products/search"
        );
        assert_eq!(
            client.url("products/search"),
            "https://dummyjson.com/products/search"
        );
    }

    #[test]
    fn test_absolute_url_passes_through() {
        let client = FetchClient::new("https://dummyjson.com").unwrap();
        assert_eq!(client.url("http://localhost:8080/x"), "http://localhost:8080/x");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = FetchClient::new("ftp://example.com").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_rejects_bad_default_header() {
        let result = FetchClient::builder("https://dummyjson.com")
            .with_default_header("bad header", "x")
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_accepts_custom_settings() {
        let client = FetchClient::builder("http://127.0.0.1:9")
            .with_timeout(TimeoutConfig::from_millis(100, 500))
            .with_user_agent("pricepal-test")
            .with_default_header("accept", "application/json")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }
}
