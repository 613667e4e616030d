//! Product API access for PricePal.
//!
//! A small GET client over `reqwest` plus the [`ProductSource`] seam the
//! search services are written against.
//!
//! # Example
//!
//! ```rust,no_run
//! use pricepal_data::{DummyJsonSource, ProductSource, SearchRequest};
//!
//! # async fn run() -> Result<(), pricepal_data::FetchError> {
//! let source = DummyJsonSource::public()?;
//! let page = source.search(&SearchRequest::new("iphone").with_limit(5)).await?;
//! println!("{} of {} products", page.products.len(), page.total);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod response;
mod source;
mod timeout;

pub use client::{FetchClient, FetchClientBuilder, DEFAULT_USER_AGENT};
pub use error::FetchError;
pub use response::Response;
pub use source::{
    DummyJsonSource, InMemorySource, ProductSource, SearchRequest, DEFAULT_BASE_URL, SEARCH_PATH,
};
pub use timeout::TimeoutConfig;
