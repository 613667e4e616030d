//! Catalog error types.

use thiserror::Error;

/// Errors raised while assembling catalog configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A retailer directory needs at least one retailer to assign from.
    #[error("Retailer directory is empty")]
    EmptyRetailerDirectory,

    /// Two directory entries share a name.
    #[error("Duplicate retailer: {0}")]
    DuplicateRetailer(String),

    /// A link template has no `{query}` placeholder.
    #[error("Link template for {retailer} is missing the {{query}} placeholder: {template}")]
    InvalidLinkTemplate { retailer: String, template: String },
}
