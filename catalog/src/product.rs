//! Catalog snapshot types.
//!
//! DESIGN
//! ======
//! These structs mirror the typed query results handed over by the upstream
//! product catalog. They are deliberately permissive on input (most fields
//! default when absent) because the upstream feed is maintained by hand in a
//! CMS and partially-filled products are normal.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::distributor::Distributor;
use crate::menu::NavItem;

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when a catalog snapshot cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to decode catalog snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

// =============================================================================
// SLUGS
// =============================================================================

/// Normalize an attribute display name into the slug used as a selection key.
///
/// Lowercases and turns every run of whitespace into a single hyphen, so
/// `"Pressure Range"` and `"pressure  range"` both become `"pressure-range"`.
#[must_use]
pub fn attribute_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

// =============================================================================
// STOCK
// =============================================================================

/// Stock status of a purchasable variation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    #[default]
    InStock,
    OnBackorder,
    OutOfStock,
}

impl StockStatus {
    /// Shopper-facing availability text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::InStock => "In stock",
            Self::OnBackorder => "Available on backorder",
            Self::OutOfStock => "Currently out of stock",
        }
    }

    /// Whether the variation can be ordered right now (backorders included).
    #[must_use]
    pub fn is_orderable(self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

// =============================================================================
// ATTRIBUTES & VARIATIONS
// =============================================================================

fn default_true() -> bool {
    true
}

/// A named, user-selectable axis of configuration (e.g. "Color").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttribute {
    /// Display name; the selection key is derived from it via [`attribute_slug`].
    pub name: String,
    /// Optional presentation label. Falls back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Ordered option values.
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether this attribute participates in variation identity.
    #[serde(default = "default_true")]
    pub variation: bool,
}

impl ProductAttribute {
    #[must_use]
    pub fn new(name: impl Into<String>, options: &[&str]) -> Self {
        Self {
            name: name.into(),
            label: None,
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            variation: true,
        }
    }

    /// Selection key for this attribute.
    #[must_use]
    pub fn slug(&self) -> String {
        attribute_slug(&self.name)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    #[must_use]
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// One fixed point in a product's attribute space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariation {
    pub id: String,
    #[serde(default)]
    pub sku: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    #[serde(default)]
    pub stock_status: StockStatus,
    /// Attribute display name (or slug) -> chosen option value.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ProductVariation {
    /// The attribute map re-keyed by slug, comparable with shopper selections.
    #[must_use]
    pub fn selection(&self) -> BTreeMap<String, String> {
        self.attributes
            .iter()
            .map(|(name, value)| (attribute_slug(name), value.clone()))
            .collect()
    }

    /// Value of the attribute with the given slug, if this variation defines it.
    #[must_use]
    pub fn value_for(&self, slug: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| attribute_slug(name) == slug)
            .map(|(_, value)| value.as_str())
    }

    /// Part number shown to the shopper: the manufacturer part number, else the SKU.
    #[must_use]
    pub fn display_part_number(&self) -> &str {
        self.part_number
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(&self.sku)
    }

    /// Price string shown to the shopper: sale/current price, else regular price.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        self.price
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.regular_price.as_deref())
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

/// A taxonomy term attached to a product (e.g. application "Data Centers").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub slug: String,
    pub name: String,
}

/// A catalog product. Simple products have no variations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_price: Option<String>,
    /// Publication date as an ISO-8601 string; compared lexicographically.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Taxonomy category -> terms, used by listing filters.
    #[serde(default)]
    pub taxonomies: BTreeMap<String, Vec<Term>>,
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub variations: Vec<ProductVariation>,
}

impl Product {
    /// Attributes that contribute to variation identity.
    pub fn variation_attributes(&self) -> impl Iterator<Item = &ProductAttribute> {
        self.attributes.iter().filter(|a| a.variation)
    }

    #[must_use]
    pub fn is_variable(&self) -> bool {
        !self.variations.is_empty() && self.variation_attributes().next().is_some()
    }

    /// Variation attributes with their option lists completed from the values
    /// that actually occur in variations.
    ///
    /// The CMS attribute list is frequently stale; declared options keep their
    /// order and values only seen on variations are appended.
    #[must_use]
    pub fn configurable_attributes(&self) -> Vec<ProductAttribute> {
        self.variation_attributes()
            .map(|attr| {
                let slug = attr.slug();
                let mut merged = attr.clone();
                for variation in &self.variations {
                    if let Some(value) = variation.value_for(&slug) {
                        if !value.is_empty() && !merged.has_option(value) {
                            merged.options.push(value.to_owned());
                        }
                    }
                }
                merged
            })
            .collect()
    }

    /// Slugs of the terms in one taxonomy category.
    pub fn term_slugs<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a str> {
        self.taxonomies
            .get(category)
            .into_iter()
            .flatten()
            .map(|t| t.slug.as_str())
    }

    /// Price string used for display and price sorting.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        self.price
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.regular_price.as_deref())
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Everything the storefront reads from the upstream catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub distributors: Vec<Distributor>,
}

impl Catalog {
    /// Decode a JSON snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Decode`] if the text is not a valid snapshot.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn product(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    /// Every taxonomy category used by at least one product, sorted.
    #[must_use]
    pub fn taxonomy_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .products
            .iter()
            .flat_map(|p| p.taxonomies.keys().cloned())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }
}
