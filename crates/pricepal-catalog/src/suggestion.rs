//! Suggestions dropdown entries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::ids::SuggestionId;
use crate::wire::ApiProduct;

/// Which dropdown group a suggestion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Products,
    Brands,
    Categories,
}

impl SuggestionCategory {
    /// Wire/label identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Brands => "brands",
            Self::Categories => "categories",
        }
    }

    /// Group heading shown in the dropdown.
    pub fn heading(&self) -> &'static str {
        match self {
            Self::Products => "Products",
            Self::Brands => "Brands",
            Self::Categories => "Categories",
        }
    }
}

/// An autocomplete entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub text: String,
    pub category: SuggestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub popular: bool,
}

impl Suggestion {
    /// Create a suggestion.
    pub fn new(
        id: impl Into<SuggestionId>,
        text: impl Into<String>,
        category: SuggestionCategory,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
            thumbnail: None,
            popular: false,
        }
    }

    /// Attach a thumbnail.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Mark as a curated popular search.
    pub fn popular(mut self) -> Self {
        self.popular = true;
        self
    }
}

/// The curated list shown for an empty search box.
pub fn popular_suggestions() -> Vec<Suggestion> {
    use SuggestionCategory::*;

    [
        ("pop1", "iPhone", Products),
        ("pop2", "Samsung", Products),
        ("pop3", "Laptop", Products),
        ("pop4", "Smartphone", Products),
        ("pop5", "Fragrances", Categories),
    ]
    .into_iter()
    .map(|(id, text, category)| Suggestion::new(id, text, category).popular())
    .collect()
}

/// Derive dropdown entries from one page of results.
///
/// Product titles come first in source order, then distinct brands, then
/// distinct categories, each in first-seen order. Items without a brand
/// contribute no brand entry.
pub fn derive_suggestions(products: &[ApiProduct]) -> Vec<Suggestion> {
    let mut suggestions: Vec<Suggestion> = products
        .iter()
        .map(|p| {
            Suggestion::new(
                SuggestionId::for_product(p.id),
                p.title.clone(),
                SuggestionCategory::Products,
            )
            .with_thumbnail(p.thumbnail.clone())
        })
        .collect();

    let brands = distinct(products.iter().filter_map(|p| p.brand.as_deref()));
    suggestions.extend(brands.into_iter().enumerate().map(|(i, brand)| {
        Suggestion::new(SuggestionId::for_brand(i), brand, SuggestionCategory::Brands)
    }));

    let categories = distinct(products.iter().map(|p| p.category.as_str()));
    suggestions.extend(categories.into_iter().enumerate().map(|(i, category)| {
        Suggestion::new(
            SuggestionId::for_category(i),
            category,
            SuggestionCategory::Categories,
        )
    }));

    suggestions
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(*v))
        .collect()
}

/// Suggestions split into the dropdown's groups, in display order.
#[derive(Debug, Default)]
pub struct SuggestionGroups<'a> {
    pub popular: Vec<&'a Suggestion>,
    pub products: Vec<&'a Suggestion>,
    pub brands: Vec<&'a Suggestion>,
    pub categories: Vec<&'a Suggestion>,
}

impl<'a> SuggestionGroups<'a> {
    /// Split suggestions by group. Popular entries only form their own group.
    pub fn group(suggestions: &'a [Suggestion]) -> Self {
        let mut groups = Self::default();
        for suggestion in suggestions {
            let bucket = if suggestion.popular {
                &mut groups.popular
            } else {
                match suggestion.category {
                    SuggestionCategory::Products => &mut groups.products,
                    SuggestionCategory::Brands => &mut groups.brands,
                    SuggestionCategory::Categories => &mut groups.categories,
                }
            };
            bucket.push(suggestion);
        }
        groups
    }

    /// Non-empty groups with their headings, in display order.
    pub fn sections(&self) -> Vec<(&'static str, &[&'a Suggestion])> {
        [
            ("Popular Searches", self.popular.as_slice()),
            (SuggestionCategory::Products.heading(), self.products.as_slice()),
            (SuggestionCategory::Brands.heading(), self.brands.as_slice()),
            (SuggestionCategory::Categories.heading(), self.categories.as_slice()),
        ]
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect()
    }

    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.popular.is_empty()
            && self.products.is_empty()
            && self.brands.is_empty()
            && self.categories.is_empty()
    }
}
