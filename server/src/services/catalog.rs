//! Catalog index: one immutable view over a loaded snapshot.
//!
//! DESIGN
//! ======
//! Variation lookups are built once per snapshot, not per request. A refresh
//! builds a complete new index and swaps it in, so a request always sees one
//! consistent snapshot and never a half-rebuilt one.

use std::collections::HashMap;

use catalog::distributor::{self, Distributor, DistributorQuery, RegionCounts};
use catalog::listing::{ListingPage, run_listing};
use catalog::menu::NavItem;
use catalog::product::{Catalog, Product, ProductAttribute, ProductVariation, StockStatus};
use catalog::query::ListingQuery;
use catalog::variation::{Feedback, Resolution, SelectedAttributes, VariationIndex};
use catalog::widget::WidgetKind;
use serde::{Deserialize, Serialize};

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// A variation attribute ready for the configurator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableAttribute {
    #[serde(flatten)]
    pub attribute: ProductAttribute,
    pub slug: String,
    pub widget: WidgetKind,
}

/// Product page payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    /// Variation attributes with options completed from actual variations.
    pub configurable: Vec<ConfigurableAttribute>,
}

/// Outcome of resolving a selection against one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum VariationLookup {
    Incomplete {
        missing: usize,
        message: String,
    },
    Matched {
        variation: ProductVariation,
        part_number: String,
        price: Option<String>,
        stock: StockStatus,
        message: String,
    },
    Unmatched {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorDirectory {
    pub distributors: Vec<Distributor>,
    /// Over the whole directory, not just the matches.
    pub counts: RegionCounts,
    pub label: String,
}

// =============================================================================
// INDEX
// =============================================================================

#[derive(Debug, Default)]
pub struct CatalogIndex {
    catalog: Catalog,
    variations: HashMap<String, VariationIndex>,
    categories: Vec<String>,
}

impl CatalogIndex {
    #[must_use]
    pub fn build(catalog: Catalog) -> Self {
        let variations = catalog
            .products
            .iter()
            .filter(|p| p.is_variable())
            .map(|p| (p.slug.clone(), VariationIndex::build(p)))
            .collect();
        let categories = catalog.taxonomy_categories();
        Self { catalog, variations, categories }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn product_count(&self) -> usize {
        self.catalog.products.len()
    }

    /// Run the listing pipeline. Filter keys that are not taxonomy
    /// categories of this snapshot are ignored.
    #[must_use]
    pub fn listing(&self, query: &ListingQuery, page_size: usize) -> ListingPage {
        let mut query = query.clone();
        query.retain_categories(&self.categories);
        run_listing(&self.catalog.products, &query, page_size)
    }

    #[must_use]
    pub fn product_detail(&self, slug: &str) -> Option<ProductDetail> {
        let product = self.catalog.product(slug)?;
        let configurable = product
            .configurable_attributes()
            .into_iter()
            .map(|attribute| ConfigurableAttribute {
                slug: attribute.slug(),
                widget: WidgetKind::detect(&attribute),
                attribute,
            })
            .collect();
        Some(ProductDetail { product: product.clone(), configurable })
    }

    /// `None` when no product has this slug. Simple products have nothing to
    /// select and resolve as incomplete with zero missing.
    #[must_use]
    pub fn resolve_variation(&self, slug: &str, selections: &SelectedAttributes) -> Option<VariationLookup> {
        let product = self.catalog.product(slug)?;
        let Some(index) = self.variations.get(&product.slug) else {
            return Some(VariationLookup::Incomplete { missing: 0, message: String::new() });
        };

        let lookup = match index.resolve(selections) {
            Resolution::Incomplete { missing } => VariationLookup::Incomplete {
                missing,
                message: Feedback::Prompt { remaining: missing }.message(),
            },
            Resolution::Matched { index: i } => match index.variation(i) {
                Some(variation) => {
                    let part_number = variation.display_part_number().to_owned();
                    let price = variation.display_price().map(str::to_owned);
                    let stock = variation.stock_status;
                    let message =
                        Feedback::Configured { part_number: part_number.clone(), price: price.clone(), stock }.message();
                    VariationLookup::Matched { variation: variation.clone(), part_number, price, stock, message }
                }
                None => VariationLookup::Unmatched { message: Feedback::InvalidConfiguration.message() },
            },
            Resolution::Unmatched => VariationLookup::Unmatched { message: Feedback::InvalidConfiguration.message() },
        };
        Some(lookup)
    }

    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.catalog.nav
    }

    #[must_use]
    pub fn distributors(&self, query: &DistributorQuery) -> DistributorDirectory {
        let found = distributor::search(&self.catalog.distributors, query);
        DistributorDirectory {
            label: distributor::result_label(found.len()),
            distributors: found.into_iter().cloned().collect(),
            counts: distributor::region_counts(&self.catalog.distributors),
        }
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
