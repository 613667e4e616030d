//! Shapes returned by the demo product API.

use serde::{Deserialize, Serialize};

/// A product item as returned by `/products/search`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    /// Missing for some categories (e.g. groceries).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// A page of search results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub products: Vec<ApiProduct>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub skip: u32,
    #[serde(default)]
    pub limit: u32,
}

impl SearchResponse {
    /// Build a response holding every given product.
    pub fn from_products(products: Vec<ApiProduct>) -> Self {
        let count = products.len() as u32;
        Self {
            products,
            total: count,
            skip: 0,
            limit: count,
        }
    }
}
