//! Full storefront page.

use pricepal_catalog::product::Product;
use pricepal_catalog::suggestion::Suggestion;
use pricepal_search::RequestView;

use crate::sections::{render_how_it_works, render_results, render_search_box, render_suggestions};
use crate::shell::{HeadContent, Shell};
use crate::styles::STYLES;

/// Everything the page shows.
#[derive(Debug, Clone, Copy)]
pub struct PageModel<'a> {
    /// Text in the search box.
    pub query: &'a str,
    /// Dropdown below the search box, when open.
    pub suggestions: Option<&'a RequestView<Suggestion>>,
    /// Results area.
    pub results: &'a RequestView<Product>,
}

impl<'a> PageModel<'a> {
    /// A page showing `results`, with the search box prefilled from its query.
    pub fn for_results(results: &'a RequestView<Product>) -> Self {
        Self {
            query: &results.query,
            suggestions: None,
            results,
        }
    }

    /// Show the suggestions dropdown.
    pub fn with_suggestions(mut self, suggestions: &'a RequestView<Suggestion>) -> Self {
        self.suggestions = Some(suggestions);
        self
    }
}

/// Render a standalone HTML document for the page.
pub fn render_page(model: &PageModel<'_>) -> String {
    let title = if model.query.trim().is_empty() {
        "PricePal".to_string()
    } else {
        format!("{} - PricePal", model.query.trim())
    };
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            "Compare prices across Indian shopping sites in one search.",
        )
        .with_style(STYLES);

    let mut sections = render_search_box(model.query);
    if let Some(suggestions) = model.suggestions {
        sections.push_str(&render_suggestions(suggestions));
    }
    sections.push_str(&render_results(model.results));
    sections.push_str(&render_how_it_works());

    Shell::new(head).render(&sections)
}
