//! Shopper-side product lists kept in browser storage: the comparison tray
//! and the recently-viewed strip.
//!
//! Both lists store a small [`ProductSummary`] rather than full products so
//! the stored JSON stays small and survives catalog changes. Stored data is
//! untrusted; decoding re-applies the caps and drops duplicates.

#[cfg(test)]
#[path = "shortlist_test.rs"]
mod shortlist_test;

use serde::{Deserialize, Serialize};

use crate::product::Product;

pub const COMPARISON_STORAGE_KEY: &str = "storefront-product-comparison";
pub const RECENTLY_VIEWED_STORAGE_KEY: &str = "storefront-recently-viewed";

/// Products that can be compared side by side.
pub const MAX_COMPARE: usize = 3;
/// Length of the recently-viewed history.
pub const MAX_RECENT: usize = 10;

/// The parts of a product the shortlist UI renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id.clone(),
            slug: p.slug.clone(),
            name: p.name.clone(),
            price: p.display_price().map(str::to_owned),
            image: p.image.clone(),
        }
    }
}

// =============================================================================
// COMPARISON
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    /// The tray already holds [`MAX_COMPARE`] products.
    Full,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Comparison {
    items: Vec<ProductSummary>,
}

impl Comparison {
    /// Decode stored JSON.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the stored text is not a product list.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let stored: Vec<ProductSummary> = serde_json::from_str(text)?;
        let mut list = Self::default();
        for item in stored {
            list.add(item);
        }
        Ok(list)
    }

    pub fn add(&mut self, product: ProductSummary) -> AddOutcome {
        if self.contains(&product.id) {
            return AddOutcome::AlreadyPresent;
        }
        if !self.can_add_more() {
            return AddOutcome::Full;
        }
        self.items.push(product);
        AddOutcome::Added
    }

    /// Returns `true` if a product was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn can_add_more(&self) -> bool {
        self.items.len() < MAX_COMPARE
    }

    #[must_use]
    pub fn items(&self) -> &[ProductSummary] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// RECENTLY VIEWED
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewedProduct {
    #[serde(flatten)]
    pub product: ProductSummary,
    pub viewed_at_ms: u64,
}

/// Most recent first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentlyViewed {
    items: Vec<ViewedProduct>,
}

impl RecentlyViewed {
    /// Decode stored JSON, keeping the first occurrence of each product.
    ///
    /// # Errors
    ///
    /// Returns the decode error when the stored text is not a history list.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let stored: Vec<ViewedProduct> = serde_json::from_str(text)?;
        let mut items: Vec<ViewedProduct> = Vec::with_capacity(stored.len().min(MAX_RECENT));
        for entry in stored {
            if items.len() == MAX_RECENT {
                break;
            }
            if !items.iter().any(|e| e.product.id == entry.product.id) {
                items.push(entry);
            }
        }
        Ok(Self { items })
    }

    /// Record a view. An earlier view of the same product moves to the front.
    pub fn record(&mut self, product: ProductSummary, now_ms: u64) {
        self.items.retain(|e| e.product.id != product.id);
        self.items.insert(0, ViewedProduct { product, viewed_at_ms: now_ms });
        self.items.truncate(MAX_RECENT);
    }

    pub fn remove(&mut self, id: &str) {
        self.items.retain(|e| e.product.id != id);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[must_use]
    pub fn has_viewed(&self, id: &str) -> bool {
        self.items.iter().any(|e| e.product.id == id)
    }

    /// History without one product, typically the one on screen.
    pub fn excluding<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a ViewedProduct> {
        self.items.iter().filter(move |e| e.product.id != id)
    }

    #[must_use]
    pub fn items(&self) -> &[ViewedProduct] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
