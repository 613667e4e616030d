//! Storefront domain types for PricePal.
//!
//! This crate holds everything that describes what the storefront shows,
//! independent of how it is fetched or rendered:
//!
//! - **Wire**: the demo product API's item and search-response shapes
//! - **Product**: the display model shown in the results grid
//! - **Price**: whole-rupee prices with Indian digit grouping
//! - **Retailers**: the injected retailer directory and assignment strategy
//! - **Mapper**: the pure wire-to-display conversion
//! - **Suggestions**: dropdown entries, the popular list and derivation
//!
//! # Example
//!
//! ```rust
//! use pricepal_catalog::prelude::*;
//!
//! let mapper = ProductMapper::new(RetailerDirectory::default());
//! let item = ApiProduct {
//!     id: 1,
//!     title: "iPhone 9".to_string(),
//!     price: 549.4,
//!     ..Default::default()
//! };
//!
//! let product = mapper.map(&item);
//! assert_eq!(product.price.amount(), 549);
//! assert!(mapper.directory().contains(&product.retailer));
//! ```

pub mod error;
pub mod ids;
pub mod price;

pub mod mapper;
pub mod product;
pub mod retailer;
pub mod suggestion;
pub mod wire;

pub use error::CatalogError;
pub use ids::*;
pub use price::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::price::Price;

    pub use crate::mapper::{summarize, AssignmentStrategy, ProductMapper, SUMMARY_MAX_CHARS};
    pub use crate::product::Product;
    pub use crate::retailer::{Retailer, RetailerDirectory};
    pub use crate::suggestion::{
        derive_suggestions, popular_suggestions, Suggestion, SuggestionCategory, SuggestionGroups,
    };
    pub use crate::wire::{ApiProduct, SearchResponse};
}
