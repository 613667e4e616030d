//! Full product search.

use pricepal_catalog::mapper::ProductMapper;
use pricepal_catalog::product::Product;
use pricepal_data::{FetchError, ProductSource, SearchRequest};

/// Searches the product source and maps results for display.
#[derive(Debug)]
pub struct SearchService<S> {
    source: S,
    mapper: ProductMapper,
}

impl<S: ProductSource> SearchService<S> {
    /// Create a service over `source` with the given mapper.
    pub fn new(source: S, mapper: ProductMapper) -> Self {
        Self { source, mapper }
    }

    /// The underlying product source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The mapper applied to every result.
    pub fn mapper(&self) -> &ProductMapper {
        &self.mapper
    }

    /// Search, resolving every failure to an empty list.
    ///
    /// A blank query returns immediately without touching the source.
    pub async fn search(&self, query: &str) -> Vec<Product> {
        match self.try_search(query).await {
            Ok(products) => products,
            Err(e) => {
                tracing::error!(query, kind = e.kind(), error = %e, "product search failed");
                Vec::new()
            }
        }
    }

    /// Search, keeping the failure.
    pub async fn try_search(&self, query: &str) -> Result<Vec<Product>, FetchError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let page = self.source.search(&SearchRequest::new(query)).await?;
        tracing::debug!(query, count = page.products.len(), total = page.total, "search results");
        Ok(self.mapper.map_all(&page.products))
    }
}
