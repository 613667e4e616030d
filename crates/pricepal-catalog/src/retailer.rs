//! Retailer directory.
//!
//! The demo API has no notion of retailers, so every product is attributed to
//! one entry of an injected, read-only directory. The directory is plain
//! configuration: it is built once and shared by reference.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Placeholder replaced with the URL-encoded product title in link templates.
pub const QUERY_PLACEHOLDER: &str = "{query}";

/// A retailer a product can be attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retailer {
    pub name: String,
    pub logo: String,
    /// Search URL with a `{query}` placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_template: Option<String>,
}

impl Retailer {
    /// Create a retailer without an outbound link.
    pub fn new(name: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            logo: logo.into(),
            link_template: None,
        }
    }

    /// Set the outbound search link template.
    pub fn with_link_template(mut self, template: impl Into<String>) -> Self {
        self.link_template = Some(template.into());
        self
    }

    /// Destination URL for a product title, or `#` without a template.
    pub fn link_for(&self, title: &str) -> String {
        match &self.link_template {
            Some(template) => template.replace(QUERY_PLACEHOLDER, &urlencoding::encode(title)),
            None => "#".to_string(),
        }
    }
}

/// Ordered, non-empty set of retailers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetailerDirectory {
    retailers: Vec<Retailer>,
}

impl RetailerDirectory {
    /// Build a directory, rejecting empty input, duplicate names and
    /// link templates without a placeholder.
    pub fn new(retailers: Vec<Retailer>) -> Result<Self, CatalogError> {
        if retailers.is_empty() {
            return Err(CatalogError::EmptyRetailerDirectory);
        }

        let mut seen = HashSet::new();
        for retailer in &retailers {
            if !seen.insert(retailer.name.as_str()) {
                return Err(CatalogError::DuplicateRetailer(retailer.name.clone()));
            }
            if let Some(template) = &retailer.link_template {
                if !template.contains(QUERY_PLACEHOLDER) {
                    return Err(CatalogError::InvalidLinkTemplate {
                        retailer: retailer.name.clone(),
                        template: template.clone(),
                    });
                }
            }
        }

        Ok(Self { retailers })
    }

    /// Number of retailers.
    pub fn len(&self) -> usize {
        self.retailers.len()
    }

    /// Whether the directory has no retailers. Never true once built.
    pub fn is_empty(&self) -> bool {
        self.retailers.is_empty()
    }

    /// Iterate retailers in directory order.
    pub fn iter(&self) -> impl Iterator<Item = &Retailer> {
        self.retailers.iter()
    }

    /// Retailer names in directory order.
    pub fn names(&self) -> Vec<&str> {
        self.retailers.iter().map(|r| r.name.as_str()).collect()
    }

    /// Look up a retailer by name.
    pub fn get(&self, name: &str) -> Option<&Retailer> {
        self.retailers.iter().find(|r| r.name == name)
    }

    /// Whether a retailer with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Pick a retailer as a stable function of `key`.
    pub fn pick_for(&self, key: &str) -> &Retailer {
        let index = (fnv1a(key) % self.retailers.len() as u64) as usize;
        &self.retailers[index]
    }

    /// Pick a retailer uniformly at random.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &Retailer {
        &self.retailers[rng.gen_range(0..self.retailers.len())]
    }
}

impl Default for RetailerDirectory {
    fn default() -> Self {
        Self {
            retailers: default_retailers(),
        }
    }
}

/// The seven retailers shown by the storefront.
pub fn default_retailers() -> Vec<Retailer> {
    vec![
        Retailer::new(
            "Amazon",
            "https://upload.wikimedia.org/wikipedia/commons/thumb/a/a9/Amazon_logo.svg/1200px-Amazon_logo.svg.png",
        )
        .with_link_template("https://www.amazon.in/s?k={query}"),
        Retailer::new(
            "Flipkart",
            "https://static-assets-web.flixcart.com/fk-p-linchpin-web/fk-cp-zion/img/flipkart-plus_8d85f4.png",
        )
        .with_link_template("https://www.flipkart.com/search?q={query}"),
        Retailer::new(
            "Croma",
            "https://media.croma.com/image/upload/v1637759004/Croma%20Assets/CMS/CromaLogo_croh8w.png",
        )
        .with_link_template("https://www.croma.com/searchB?q={query}"),
        Retailer::new(
            "Myntra",
            "https://constant.myntassets.com/web/assets/img/logo_myntra.png",
        )
        .with_link_template("https://www.myntra.com/{query}"),
        Retailer::new(
            "Reliance Digital",
            "https://www.reliancedigital.in/wp-content/uploads/2019/11/Reliance_Digital_Logo.png",
        )
        .with_link_template("https://www.reliancedigital.in/search?q={query}"),
        Retailer::new(
            "Zepto",
            "https://cdn.zeptonow.com/web-static-assets-prod/artifacts/8.1.1/images/icons/zepto-logo.svg",
        )
        .with_link_template("https://www.zeptonow.com/search?query={query}"),
        Retailer::new(
            "Blinkit",
            "https://blinkit.com/images/faviconChange/blinkit-favicon-120x120.png",
        )
        .with_link_template("https://blinkit.com/s/?q={query}"),
    ]
}

/// 64-bit FNV-1a.
fn fnv1a(key: &str) -> u64 {
    key.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
