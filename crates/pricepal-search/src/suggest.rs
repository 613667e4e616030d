//! Autocomplete suggestions.

use pricepal_catalog::suggestion::{derive_suggestions, popular_suggestions, Suggestion};
use pricepal_data::{FetchError, ProductSource, SearchRequest};

/// Page size for suggestion lookups.
pub const DEFAULT_SUGGESTION_LIMIT: u32 = 5;

/// Produces dropdown suggestions for a partial query.
#[derive(Debug)]
pub struct SuggestionService<S> {
    source: S,
    limit: u32,
}

impl<S: ProductSource> SuggestionService<S> {
    /// Create a service over `source`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            limit: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Override the lookup page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The lookup page size.
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// The underlying product source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Suggestions for `query`, resolving failures to an empty list.
    pub async fn suggest(&self, query: &str, popular_only: bool) -> Vec<Suggestion> {
        match self.try_suggest(query, popular_only).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::error!(query, kind = e.kind(), error = %e, "suggestion lookup failed");
                Vec::new()
            }
        }
    }

    /// Suggestions for `query`, keeping the failure.
    ///
    /// `popular_only` or a blank query gives the curated list with no lookup.
    pub async fn try_suggest(
        &self,
        query: &str,
        popular_only: bool,
    ) -> Result<Vec<Suggestion>, FetchError> {
        if popular_only || query.trim().is_empty() {
            return Ok(popular_suggestions());
        }

        let request = SearchRequest::new(query).with_limit(self.limit);
        let page = self.source.search(&request).await?;
        let suggestions = derive_suggestions(&page.products);
        tracing::debug!(query, count = suggestions.len(), "suggestions derived");
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricepal_catalog::suggestion::SuggestionCategory;
    use pricepal_catalog::wire::ApiProduct;
    use pricepal_data::InMemorySource;

    fn product(id: u64, title: &str, brand: Option<&str>, category: &str) -> ApiProduct {
        ApiProduct {
            id,
            title: title.to_string(),
            brand: brand.map(str::to_string),
            category: category.to_string(),
            thumbnail: format!("https://cdn.example/{}.webp", id),
            ..Default::default()
        }
    }

    fn source() -> InMemorySource {
        InMemorySource::new(vec![
            product(1, "iPhone 9", Some("Apple"), "smartphones"),
            product(2, "iPhone X", Some("Apple"), "smartphones"),
            product(3, "Phone Stand", None, "mobile-accessories"),
            product(4, "Samsung Universe 9", Some("Samsung"), "tablets"),
        ])
    }

    #[tokio::test]
    async fn test_blank_query_gives_popular_without_lookup() {
        let service = SuggestionService::new(source());
        let suggestions = service.suggest("  ", false).await;

        assert_eq!(suggestions, popular_suggestions());
        assert_eq!(service.source().call_count(), 0);
    }

    #[tokio::test]
    async fn test_popular_only_ignores_query() {
        let service = SuggestionService::new(source());
        let suggestions = service.suggest("iphone", true).await;

        assert_eq!(suggestions.len(), 5);
        assert!(suggestions.iter().all(|s| s.popular));
        assert_eq!(service.source().call_count(), 0);
    }

    #[tokio::test]
    async fn test_lookup_uses_limit() {
        let service = SuggestionService::new(source());
        service.suggest("phone", false).await;

        let calls = service.source().calls();
        assert_eq!(calls, vec![SearchRequest::new("phone").with_limit(5)]);
    }

    #[tokio::test]
    async fn test_derived_groups() {
        let service = SuggestionService::new(source());
        let suggestions = service.suggest("phone", false).await;

        let of = |category| {
            suggestions
                .iter()
                .filter(|s| s.category == category)
                .map(|s| s.text.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(of(SuggestionCategory::Products), vec!["iPhone 9", "iPhone X", "Phone Stand"]);
        assert_eq!(of(SuggestionCategory::Brands), vec!["Apple"]);
        assert_eq!(
            of(SuggestionCategory::Categories),
            vec!["smartphones", "mobile-accessories"]
        );
    }

    #[tokio::test]
    async fn test_custom_limit() {
        let service = SuggestionService::new(source()).with_limit(2);
        let suggestions = service.suggest("phone", false).await;
        let products = suggestions
            .iter()
            .filter(|s| s.category == SuggestionCategory::Products)
            .count();
        assert_eq!(products, 2);
        assert_eq!(service.limit(), 2);
    }

    #[tokio::test]
    async fn test_failure_resolves_to_empty() {
        let service = SuggestionService::new(source().fail_with_status(503));
        assert!(service.suggest("phone", false).await.is_empty());
        assert!(service.try_suggest("phone", false).await.is_err());
    }
}
