//! Results section: product grid, empty state and placeholders.

use pricepal_catalog::product::Product;
use pricepal_search::{RequestState, RequestView};

use crate::escape::html_escape;

/// Number of placeholder cards shown while results load.
const SKELETON_CARDS: usize = 8;

/// Render the results area for a view. Idle renders nothing.
pub fn render_results(view: &RequestView<Product>) -> String {
    match &view.state {
        RequestState::Idle => String::new(),
        RequestState::Pending => render_results_skeleton(),
        RequestState::Failed { reason } => render_results_error(&view.query, reason),
        RequestState::Succeeded if view.items.is_empty() => render_results_empty(&view.query),
        RequestState::Succeeded => render_results_grid(&view.items, &view.query),
    }
}

/// Render the product grid.
pub fn render_results_grid(products: &[Product], query: &str) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="search-results" id="results" data-section="results">
    <h2>Search Results for "{}"</h2>
    <div class="product-grid">
        {}
    </div>
</section>"#,
        html_escape(query),
        cards
    )
}

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let summary = product
        .summary
        .as_deref()
        .map(|s| format!(r#"<p class="product-summary">{}</p>"#, html_escape(s)))
        .unwrap_or_default();
    let badge = match product.discount_percentage {
        Some(d) if product.has_discount() => {
            format!(r#"<span class="discount-badge">{}% off</span>"#, d)
        }
        _ => String::new(),
    };

    format!(
        r#"<article class="product-card" data-product-id="{id}">
    <div class="product-image">
        {badge}<img src="{image}" alt="{title}" loading="lazy">
    </div>
    <div class="product-info">
        <h3 class="product-title" title="{title}">{title}</h3>
        {summary}
        <div class="product-meta">
            <span class="product-price">{price}</span>
            <img src="{logo}" alt="{retailer}" class="retailer-logo">
        </div>
        <a href="{url}" class="view-button" target="_blank" rel="noopener sponsored">{cta} &#8599;</a>
    </div>
</article>"#,
        id = html_escape(product.id.as_str()),
        badge = badge,
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        summary = summary,
        price = product.price,
        logo = html_escape(&product.retailer_logo),
        retailer = html_escape(&product.retailer),
        url = html_escape(&product.url),
        cta = html_escape(&product.cta_label()),
    )
}

/// Render the "nothing found" state.
pub fn render_results_empty(query: &str) -> String {
    format!(
        r#"<section class="search-results empty" data-section="results">
    <h2>Search Results</h2>
    <div class="empty-state">
        <p>No products found for "{}"</p>
    </div>
</section>"#,
        html_escape(query)
    )
}

/// Render placeholder cards for a pending search.
pub fn render_results_skeleton() -> String {
    let cards: String = (0..SKELETON_CARDS)
        .map(|_| {
            r#"<div class="product-card skeleton">
        <div class="skeleton-image"></div>
        <div class="skeleton-text"></div>
        <div class="skeleton-text short"></div>
    </div>"#
        })
        .collect();

    format!(
        r#"<section class="search-results skeleton" data-section="results" aria-busy="true">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render a failed search.
pub fn render_results_error(query: &str, reason: &str) -> String {
    format!(
        r#"<section class="search-results error" data-section="results">
    <div class="error-state">
        <h2>Unable to load results for "{}"</h2>
        <p>{}</p>
    </div>
</section>"#,
        html_escape(query),
        html_escape(reason)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricepal_catalog::mapper::ProductMapper;
    use pricepal_catalog::wire::ApiProduct;
    use pricepal_search::RequestSequencer;

    fn product(discount: f64) -> Product {
        ProductMapper::default().map(&ApiProduct {
            id: 1,
            title: "iPhone 9".to_string(),
            description: "An apple mobile which is nothing like apple".to_string(),
            price: 54999.0,
            discount_percentage: discount,
            thumbnail: "https://cdn.example/1.jpg".to_string(),
            ..Default::default()
        })
    }

    fn view(query: &str, outcome: Result<Vec<Product>, String>) -> RequestView<Product> {
        let ticket = RequestSequencer::new().issue();
        let mut view = RequestView::default();
        view.begin(ticket, query);
        view.finish(ticket, outcome);
        view
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(render_results(&RequestView::default()), "");
    }

    #[test]
    fn test_card_contents() {
        let product = product(12.96);
        let html = render_product_card(&product);

        assert!(html.contains("\u{20b9}54,999"));
        assert!(html.contains("13% off"));
        assert!(html.contains(&format!("View on {}", product.retailer)));
        assert!(html.contains(r#"class="product-summary">An apple mobile"#));
        assert!(html.contains(r#"target="_blank""#));
    }

    #[test]
    fn test_card_without_discount() {
        assert!(!render_product_card(&product(0.0)).contains("discount-badge"));
    }

    #[test]
    fn test_grid_has_card_per_product() {
        let html = render_results(&view("iphone", Ok(vec![product(0.0), product(5.0)])));
        assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
        assert!(html.contains(r#"Search Results for "iphone""#));
    }

    #[test]
    fn test_empty_state_names_query() {
        let html = render_results(&view("<toaster>", Ok(Vec::new())));
        assert!(html.contains(r#"No products found for "&lt;toaster&gt;""#));
    }

    #[test]
    fn test_pending_is_skeleton() {
        let mut pending = RequestView::default();
        pending.begin(RequestSequencer::new().issue(), "iphone");
        let html = render_results(&pending);
        assert_eq!(html.matches("product-card skeleton").count(), SKELETON_CARDS);
    }

    #[test]
    fn test_failed_shows_reason() {
        let html = render_results(&view("iphone", Err("Request timed out".to_string())));
        assert!(html.contains("Request timed out"));
        assert!(!html.contains("product-grid"));
    }
}
