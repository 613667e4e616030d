//! Newtype IDs for display entities.
//!
//! Products and suggestions are both keyed by strings in the UI, so the
//! newtypes keep a suggestion id from being used where a product id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A display identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(SuggestionId);

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl SuggestionId {
    /// Id for a product-title suggestion (`prod-<product id>`).
    pub fn for_product(product_id: u64) -> Self {
        Self(format!("prod-{}", product_id))
    }

    /// Id for the `index`-th distinct brand of a response.
    pub fn for_brand(index: usize) -> Self {
        Self(format!("brand-{}", index))
    }

    /// Id for the `index`-th distinct category of a response.
    pub fn for_category(index: usize) -> Self {
        Self(format!("cat-{}", index))
    }
}
