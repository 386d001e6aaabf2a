//! Variation matching: shopper selections -> at most one product variation.
//!
//! DESIGN
//! ======
//! `VariationIndex` is built once per product snapshot and maps the sorted
//! `(slug, value)` pairs of every variation to its position, so resolving a
//! selection is a hash lookup rather than a scan. `VariationSelector` wraps an
//! index with the shopper's in-progress selection and re-resolves from scratch
//! after every change; no previous match survives an edit.
//!
//! A complete selection that maps to no variation and a complete selection
//! that maps to several (bad upstream data) both resolve to
//! [`Resolution::Unmatched`]. Shoppers see "Invalid Configuration" either way.

#[cfg(test)]
#[path = "variation_test.rs"]
mod variation_test;

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::product::{Product, ProductAttribute, ProductVariation, StockStatus, attribute_slug};

/// Shopper selection: attribute slug -> chosen option value.
pub type SelectedAttributes = BTreeMap<String, String>;

type VariationKey = Vec<(String, String)>;

// =============================================================================
// RESOLUTION
// =============================================================================

/// Outcome of resolving a selection against a product's variations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// At least one variation attribute has no selection yet.
    Incomplete { missing: usize },
    /// The selection identifies exactly one variation (position in the index).
    Matched { index: usize },
    /// Every attribute is selected but no single variation has this combination.
    Unmatched,
}

impl Resolution {
    #[must_use]
    pub fn is_complete(self) -> bool {
        !matches!(self, Self::Incomplete { .. })
    }
}

/// What the configurator shows below the selector controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Ask for the remaining selections.
    Prompt { remaining: usize },
    /// A variation is configured.
    Configured { part_number: String, price: Option<String>, stock: StockStatus },
    /// Every attribute is chosen but the combination is not sold.
    InvalidConfiguration,
}

impl Feedback {
    /// Shopper-facing summary line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Prompt { remaining: 1 } => "Select 1 more option to see price and part number".to_owned(),
            Self::Prompt { remaining } => {
                format!("Select {remaining} more options to see price and part number")
            }
            Self::Configured { part_number, .. } => format!("Selected configuration: {part_number}"),
            Self::InvalidConfiguration => {
                "Invalid Configuration: this combination of options is not available".to_owned()
            }
        }
    }
}

// =============================================================================
// INDEX
// =============================================================================

/// Immutable lookup structure for one product's variations.
#[derive(Debug, Clone, Default)]
pub struct VariationIndex {
    attributes: Vec<ProductAttribute>,
    slugs: Vec<String>,
    variations: Vec<ProductVariation>,
    by_key: HashMap<VariationKey, usize>,
    ambiguous: HashSet<VariationKey>,
}

impl VariationIndex {
    /// Index a product's variation attributes and variations.
    #[must_use]
    pub fn build(product: &Product) -> Self {
        Self::from_parts(product.configurable_attributes(), product.variations.clone())
    }

    /// Index explicit attribute and variation lists. Descriptive attributes
    /// (`variation == false`) are dropped.
    #[must_use]
    pub fn from_parts(attributes: Vec<ProductAttribute>, variations: Vec<ProductVariation>) -> Self {
        let attributes: Vec<ProductAttribute> = attributes.into_iter().filter(|a| a.variation).collect();
        let slugs = attributes.iter().map(ProductAttribute::slug).collect();

        let mut by_key = HashMap::with_capacity(variations.len());
        let mut ambiguous = HashSet::new();
        for (i, variation) in variations.iter().enumerate() {
            let key: VariationKey = variation.selection().into_iter().collect();
            if by_key.contains_key(&key) {
                ambiguous.insert(key);
            } else {
                by_key.insert(key, i);
            }
        }

        Self { attributes, slugs, variations, by_key, ambiguous }
    }

    /// Variation attributes in display order.
    #[must_use]
    pub fn attributes(&self) -> &[ProductAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn variations(&self) -> &[ProductVariation] {
        &self.variations
    }

    #[must_use]
    pub fn variation(&self, index: usize) -> Option<&ProductVariation> {
        self.variations.get(index)
    }

    #[must_use]
    pub fn attribute(&self, slug: &str) -> Option<&ProductAttribute> {
        self.slugs
            .iter()
            .position(|s| s == slug)
            .map(|i| &self.attributes[i])
    }

    /// Resolve a selection. Keys that are not variation attributes are ignored.
    #[must_use]
    pub fn resolve(&self, selections: &SelectedAttributes) -> Resolution {
        let missing = self
            .slugs
            .iter()
            .filter(|slug| selected_value(selections, slug).is_none())
            .count();
        if missing > 0 {
            return Resolution::Incomplete { missing };
        }

        let key: VariationKey = self
            .slugs
            .iter()
            .filter_map(|slug| selected_value(selections, slug).map(|v| (slug.clone(), v.to_owned())))
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .collect();

        if self.ambiguous.contains(&key) {
            return Resolution::Unmatched;
        }
        match self.by_key.get(&key) {
            Some(&index) => Resolution::Matched { index },
            None => Resolution::Unmatched,
        }
    }

    /// Values of `slug` that still lead to at least one variation given every
    /// other current selection.
    #[must_use]
    pub fn available_options(&self, slug: &str, selections: &SelectedAttributes) -> Vec<String> {
        let others: Vec<(&str, &str)> = self
            .slugs
            .iter()
            .filter(|s| s.as_str() != slug)
            .filter_map(|s| selected_value(selections, s).map(|v| (s.as_str(), v)))
            .collect();

        let seen: HashSet<&str> = self
            .variations
            .iter()
            .filter(|variation| others.iter().all(|(k, v)| variation.value_for(k) == Some(*v)))
            .filter_map(|variation| variation.value_for(slug))
            .filter(|v| !v.is_empty())
            .collect();

        match self.attribute(slug) {
            Some(attr) => attr
                .options
                .iter()
                .filter(|o| seen.contains(o.as_str()))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

fn selected_value<'a>(selections: &'a SelectedAttributes, slug: &str) -> Option<&'a str> {
    selections
        .get(slug)
        .map(String::as_str)
        .filter(|v| !v.is_empty())
}

// =============================================================================
// SELECTOR
// =============================================================================

/// A shopper's in-progress configuration of one product.
#[derive(Debug, Clone)]
pub struct VariationSelector {
    index: VariationIndex,
    selections: SelectedAttributes,
    resolution: Resolution,
}

impl Default for VariationSelector {
    fn default() -> Self {
        Self::new(VariationIndex::default())
    }
}

impl VariationSelector {
    #[must_use]
    pub fn new(index: VariationIndex) -> Self {
        let resolution = index.resolve(&SelectedAttributes::new());
        Self { index, selections: SelectedAttributes::new(), resolution }
    }

    #[must_use]
    pub fn index(&self) -> &VariationIndex {
        &self.index
    }

    #[must_use]
    pub fn selections(&self) -> &SelectedAttributes {
        &self.selections
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Merge one attribute choice and re-resolve.
    ///
    /// `attribute` may be a display name or a slug. An empty value clears the
    /// attribute.
    pub fn select(&mut self, attribute: &str, value: &str) -> Resolution {
        let slug = attribute_slug(attribute);
        if value.is_empty() {
            self.selections.remove(&slug);
        } else {
            self.selections.insert(slug, value.to_owned());
        }
        self.reevaluate()
    }

    /// Drop the choice for one attribute.
    pub fn clear(&mut self, slug: &str) -> Resolution {
        self.selections.remove(slug);
        self.reevaluate()
    }

    /// Discard every selection.
    pub fn reset(&mut self) {
        self.selections.clear();
        self.reevaluate();
    }

    /// Swap in a new product's index. Prior selections never carry over.
    pub fn replace_index(&mut self, index: VariationIndex) {
        self.index = index;
        self.reset();
    }

    /// Replace the selection with pairs read from a shared link.
    ///
    /// Pairs naming an unknown attribute or an option the attribute does not
    /// offer are dropped.
    pub fn restore<I, K, V>(&mut self, pairs: I) -> Resolution
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.selections.clear();
        for (key, value) in pairs {
            let slug = attribute_slug(key.as_ref());
            let value = value.as_ref();
            let known = self.index.attribute(&slug).is_some_and(|a| a.has_option(value));
            if known {
                self.selections.insert(slug, value.to_owned());
            }
        }
        self.reevaluate()
    }

    /// Current choice for one attribute slug.
    #[must_use]
    pub fn value(&self, slug: &str) -> Option<&str> {
        selected_value(&self.selections, slug)
    }

    /// The matched variation, if the selection resolves to one.
    #[must_use]
    pub fn matched(&self) -> Option<&ProductVariation> {
        match self.resolution() {
            Resolution::Matched { index } => self.index.variation(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        match self.resolution() {
            Resolution::Incomplete { missing } => Feedback::Prompt { remaining: missing },
            Resolution::Unmatched => Feedback::InvalidConfiguration,
            Resolution::Matched { index } => match self.index.variation(index) {
                Some(v) => Feedback::Configured {
                    part_number: v.display_part_number().to_owned(),
                    price: v.display_price().map(str::to_owned),
                    stock: v.stock_status,
                },
                None => Feedback::InvalidConfiguration,
            },
        }
    }

    /// Options for `slug` still reachable from the other selections.
    #[must_use]
    pub fn available_options(&self, slug: &str) -> Vec<String> {
        self.index.available_options(slug, &self.selections)
    }

    fn reevaluate(&mut self) -> Resolution {
        self.resolution = self.index.resolve(&self.selections);
        self.resolution
    }
}
