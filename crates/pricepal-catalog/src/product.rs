//! The display product shown in the results grid.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;
use crate::price::Price;

/// A product card in the results grid.
///
/// Created per search response and discarded on the next search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub price: Price,
    pub retailer: String,
    pub retailer_logo: String,
    /// Where "View on <retailer>" leads.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Whole-percent discount, when the source reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u8>,
}

impl Product {
    /// Label for the outbound button.
    pub fn cta_label(&self) -> String {
        format!("View on {}", self.retailer)
    }

    /// Whether the card should show a discount badge.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage.is_some_and(|d| d > 0)
    }
}
