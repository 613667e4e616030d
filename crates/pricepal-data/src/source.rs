//! Product sources: the remote search API and an in-memory stand-in.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use pricepal_catalog::wire::{ApiProduct, SearchResponse};

use crate::{FetchClient, FetchError};

/// Base URL of the public demo product API.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Search endpoint path.
pub const SEARCH_PATH: &str = "/products/search";

/// One search call against a product source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text query, sent as `q`.
    pub query: String,
    /// Page size, sent as `limit` when present.
    pub limit: Option<u32>,
}

impl SearchRequest {
    /// A search with the API's default page size.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: None,
        }
    }

    /// Cap the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Something that can answer product searches.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Run one search.
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError>;
}

#[async_trait]
impl<S: ProductSource + ?Sized> ProductSource for Arc<S> {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        (**self).search(request).await
    }
}

/// The DummyJSON-compatible search API.
#[derive(Debug, Clone)]
pub struct DummyJsonSource {
    client: FetchClient,
}

impl DummyJsonSource {
    /// Use an already configured client.
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }

    /// Client for the public demo API with default settings.
    pub fn public() -> Result<Self, FetchError> {
        Ok(Self::new(FetchClient::new(DEFAULT_BASE_URL)?))
    }

    /// The underlying client.
    pub fn client(&self) -> &FetchClient {
        &self.client
    }
}

#[async_trait]
impl ProductSource for DummyJsonSource {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        let limit = request.limit.map(|l| l.to_string());
        let mut query = vec![("q", request.query.as_str())];
        if let Some(limit) = limit.as_deref() {
            query.push(("limit", limit));
        }

        self.client.get_json(SEARCH_PATH, &query).await
    }
}

/// In-memory catalogue that records every call it receives.
///
/// Matching is a case-insensitive substring test over title, brand,
/// category and description. Per-query delays run on the tokio clock.
#[derive(Debug, Default)]
pub struct InMemorySource {
    products: Vec<ApiProduct>,
    delays: HashMap<String, Duration>,
    fail_status: Option<u16>,
    calls: Mutex<Vec<SearchRequest>>,
}

impl InMemorySource {
    /// Serve the given products.
    pub fn new(products: Vec<ApiProduct>) -> Self {
        Self {
            products,
            ..Default::default()
        }
    }

    /// Delay answers to `query` by `delay`.
    pub fn with_delay(mut self, query: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(query.into(), delay);
        self
    }

    /// Answer every call with an HTTP error of the given status.
    pub fn fail_with_status(mut self, status: u16) -> Self {
        self.fail_status = Some(status);
        self
    }

    /// Every request received so far, in arrival order.
    pub fn calls(&self) -> Vec<SearchRequest> {
        self.lock_calls().clone()
    }

    /// Number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<SearchRequest>> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn matches(product: &ApiProduct, needle: &str) -> bool {
        [
            Some(product.title.as_str()),
            product.brand.as_deref(),
            Some(product.category.as_str()),
            Some(product.description.as_str()),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

#[async_trait]
impl ProductSource for InMemorySource {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FetchError> {
        self.lock_calls().push(request.clone());

        if let Some(delay) = self.delays.get(&request.query) {
            tokio::time::sleep(*delay).await;
        }

        if let Some(status) = self.fail_status {
            return Err(FetchError::Http {
                status,
                message: "in-memory failure".to_string(),
            });
        }

        let needle = request.query.trim().to_lowercase();
        let matching: Vec<ApiProduct> = self
            .products
            .iter()
            .filter(|p| Self::matches(p, &needle))
            .cloned()
            .collect();
        let total = matching.len() as u32;
        let page: Vec<ApiProduct> = match request.limit {
            Some(limit) => matching.into_iter().take(limit as usize).collect(),
            None => matching,
        };

        let mut response = SearchResponse::from_products(page);
        response.total = total;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str, brand: Option<&str>, category: &str) -> ApiProduct {
        ApiProduct {
            id,
            title: title.to_string(),
            brand: brand.map(str::to_string),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn catalogue() -> Vec<ApiProduct> {
        vec![
            product(1, "iPhone 9", Some("Apple"), "smartphones"),
            product(2, "iPhone X", Some("Apple"), "smartphones"),
            product(3, "Galaxy S21", Some("Samsung"), "smartphones"),
            product(4, "Eyeshadow Palette", None, "beauty"),
        ]
    }

    #[test]
    fn test_search_request_builder() {
        let request = SearchRequest::new("phone").with_limit(5);
        assert_eq!(request.query, "phone");
        assert_eq!(request.limit, Some(5));
    }

    #[tokio::test]
    async fn test_in_memory_matches_case_insensitively() {
        let source = InMemorySource::new(catalogue());
        let page = source.search(&SearchRequest::new("IPHONE")).await.unwrap();
        let ids: Vec<u64> = page.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn test_in_memory_matches_brand_and_category() {
        let source = InMemorySource::new(catalogue());
        let page = source.search(&SearchRequest::new("samsung")).await.unwrap();
        assert_eq!(page.products.len(), 1);

        let page = source.search(&SearchRequest::new("beauty")).await.unwrap();
        assert_eq!(page.products[0].id, 4);
    }

    #[tokio::test]
    async fn test_in_memory_applies_limit() {
        let source = InMemorySource::new(catalogue());
        let page = source
            .search(&SearchRequest::new("smartphones").with_limit(2))
            .await
            .unwrap();
        assert_eq!(page.products.len(), 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.limit, 2);
    }

    #[tokio::test]
    async fn test_in_memory_records_calls() {
        let source = InMemorySource::new(catalogue());
        assert_eq!(source.call_count(), 0);

        source.search(&SearchRequest::new("a")).await.unwrap();
        source.search(&SearchRequest::new("b").with_limit(5)).await.unwrap();

        let calls = source.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], SearchRequest::new("b").with_limit(5));
    }

    #[tokio::test]
    async fn test_in_memory_failure() {
        let source = InMemorySource::new(catalogue()).fail_with_status(500);
        let err = source.search(&SearchRequest::new("iphone")).await.unwrap_err();
        assert!(matches!(err, FetchError::Http { status: 500, .. }));
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_in_memory_delay_uses_tokio_clock() {
        let source = InMemorySource::new(catalogue()).with_delay("iphone", Duration::from_secs(2));
        let start = tokio::time::Instant::now();
        source.search(&SearchRequest::new("iphone")).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_arc_source_delegates() {
        let source = Arc::new(InMemorySource::new(catalogue()));
        let shared: Arc<InMemorySource> = Arc::clone(&source);
        shared.search(&SearchRequest::new("galaxy")).await.unwrap();
        assert_eq!(source.call_count(), 1);
    }

    #[test]
    fn test_public_source_targets_demo_api() {
        let source = DummyJsonSource::public().unwrap();
        assert_eq!(source.client().base_url(), DEFAULT_BASE_URL);
    }
}
