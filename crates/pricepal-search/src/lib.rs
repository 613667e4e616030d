//! Search behaviour for the PricePal storefront.
//!
//! - [`SearchService`] and [`SuggestionService`] wrap a
//!   [`ProductSource`](pricepal_data::ProductSource) and never fail outward
//!   from their plain entry points
//! - [`debounce`] settles keystrokes before they reach the network
//! - [`RequestSequencer`] and [`RequestView`] keep the newest query's outcome
//!   visible
//! - [`SearchSession`] ties them together and publishes views over `watch`
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pricepal_catalog::prelude::*;
//! use pricepal_data::InMemorySource;
//! use pricepal_search::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = Arc::new(InMemorySource::new(vec![ApiProduct {
//!     id: 1,
//!     title: "iPhone 9".to_string(),
//!     ..Default::default()
//! }]));
//! let session = SearchSession::new(source, ProductMapper::default());
//!
//! let view = session.submit("iphone").await;
//! assert_eq!(view.state, RequestState::Succeeded);
//! assert_eq!(view.items.len(), 1);
//! # }
//! ```

mod debounce;
mod search;
mod sequence;
mod session;
mod state;
mod suggest;

pub use debounce::{debounce, DEFAULT_DEBOUNCE};
pub use search::SearchService;
pub use sequence::{RequestSequencer, RequestTicket};
pub use session::SearchSession;
pub use state::{RequestState, RequestView};
pub use suggest::{SuggestionService, DEFAULT_SUGGESTION_LIMIT};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::debounce::{debounce, DEFAULT_DEBOUNCE};
    pub use crate::search::SearchService;
    pub use crate::sequence::{RequestSequencer, RequestTicket};
    pub use crate::session::SearchSession;
    pub use crate::state::{RequestState, RequestView};
    pub use crate::suggest::{SuggestionService, DEFAULT_SUGGESTION_LIMIT};
}
