//! Hero section with the search box.

use crate::escape::html_escape;

/// Placeholder shown in the empty search box.
pub const SEARCH_PLACEHOLDER: &str =
    "Search for a product (e.g. iPhone 15, Samsung TV, Dettol Soap\u{2026})";

/// Render the hero with the search form, prefilled with `query`.
pub fn render_search_box(query: &str) -> String {
    format!(
        r#"<section class="hero" data-section="search-box">
    <h1>One Search. All Prices. <span class="accent">Smarter Shopping</span> Starts Here.</h1>
    <p class="tagline">Instantly compare prices from Flipkart, Amazon, Croma, Zepto, Blinkit, and more. Find the best deal before you buy.</p>
    <form class="search-form" action="/" method="get" role="search">
        <input type="text" name="q" value="{}" placeholder="{}" autocomplete="off" aria-label="Search products">
        <button type="submit">Compare Prices</button>
    </form>
</section>"#,
        html_escape(query),
        html_escape(SEARCH_PLACEHOLDER)
    )
}
