//! HTML rendering for the PricePal storefront.
//!
//! Sections are plain functions from views to HTML strings, composed into a
//! standalone document by [`render_page`]. All text is escaped.
//!
//! # Example
//!
//! ```rust
//! use pricepal_render::{render_page, PageModel};
//! use pricepal_search::RequestView;
//!
//! let results = RequestView::default();
//! let html = render_page(&PageModel::for_results(&results));
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod escape;
pub mod page;
pub mod sections;
pub mod shell;
pub mod styles;

pub use escape::{highlight, html_escape, match_ranges};
pub use page::{render_page, PageModel};
pub use sections::*;
pub use shell::{HeadContent, Shell};
