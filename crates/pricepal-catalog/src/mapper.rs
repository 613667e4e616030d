//! Conversion from API items to display products.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::price::Price;
use crate::product::Product;
use crate::retailer::{Retailer, RetailerDirectory};
use crate::wire::ApiProduct;

/// Maximum summary length before the ellipsis, in characters.
pub const SUMMARY_MAX_CHARS: usize = 100;

const ELLIPSIS: &str = "...";

/// How a product is attributed to a retailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStrategy {
    /// Hash of the product id; the same product always lands on the same retailer.
    #[default]
    Hashed,
    /// Fresh uniform pick on every mapping call.
    Random,
}

/// Maps API items to display products against an injected retailer directory.
#[derive(Debug, Clone)]
pub struct ProductMapper {
    directory: Arc<RetailerDirectory>,
    strategy: AssignmentStrategy,
}

impl ProductMapper {
    /// Create a mapper using hashed assignment.
    pub fn new(directory: RetailerDirectory) -> Self {
        Self {
            directory: Arc::new(directory),
            strategy: AssignmentStrategy::default(),
        }
    }

    /// Set the assignment strategy.
    pub fn with_strategy(mut self, strategy: AssignmentStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The directory retailers are drawn from.
    pub fn directory(&self) -> &RetailerDirectory {
        &self.directory
    }

    /// The active assignment strategy.
    pub fn strategy(&self) -> AssignmentStrategy {
        self.strategy
    }

    /// Map one API item. Total: every item produces a product.
    pub fn map(&self, item: &ApiProduct) -> Product {
        let id = ProductId::from(item.id);
        let retailer = self.retailer_for(&id);

        Product {
            url: retailer.link_for(&item.title),
            retailer: retailer.name.clone(),
            retailer_logo: retailer.logo.clone(),
            title: item.title.clone(),
            image: item.thumbnail.clone(),
            price: Price::from_amount(item.price),
            summary: summarize(&item.description),
            discount_percentage: discount(item.discount_percentage),
            id,
        }
    }

    /// Map a page of items, preserving length and order.
    pub fn map_all(&self, items: &[ApiProduct]) -> Vec<Product> {
        items.iter().map(|item| self.map(item)).collect()
    }

    fn retailer_for(&self, id: &ProductId) -> &Retailer {
        match self.strategy {
            AssignmentStrategy::Hashed => self.directory.pick_for(id.as_str()),
            AssignmentStrategy::Random => self.directory.pick_random(&mut rand::thread_rng()),
        }
    }
}

impl Default for ProductMapper {
    fn default() -> Self {
        Self::new(RetailerDirectory::default())
    }
}

/// Card summary: the description cut to [`SUMMARY_MAX_CHARS`] characters
/// with an ellipsis when longer, unchanged otherwise. Empty yields `None`.
pub fn summarize(description: &str) -> Option<String> {
    if description.is_empty() {
        return None;
    }

    match description.char_indices().nth(SUMMARY_MAX_CHARS) {
        Some((cut, _)) => Some(format!("{}{}", &description[..cut], ELLIPSIS)),
        None => Some(description.to_string()),
    }
}

fn discount(percentage: f64) -> Option<u8> {
    if !percentage.is_finite() || percentage <= 0.0 {
        return None;
    }
    let rounded = percentage.round().min(100.0) as u8;
    (rounded > 0).then_some(rounded)
}
