//! Product configurator state: the loaded product plus its variation selector.
//!
//! DESIGN
//! ======
//! The selector is rebuilt whenever a different product payload arrives, so
//! selections never leak from one product (or one catalog snapshot) to the
//! next. Selections are restored from the URL once per load and every change
//! hands back the query string the page should write with `replaceState`.

#[cfg(test)]
#[path = "configurator_test.rs"]
mod configurator_test;

use catalog::product::{Product, ProductAttribute, ProductVariation};
use catalog::query::{selection_from_query, selection_to_query};
use catalog::share::{ShareOutcome, share_url};
use catalog::variation::{Feedback, VariationIndex, VariationSelector};
use catalog::widget::WidgetKind;

/// One attribute control as the configurator renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeControl {
    pub slug: String,
    pub label: String,
    pub widget: WidgetKind,
    pub options: Vec<String>,
    /// Options still reachable given the other selections.
    pub available: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct ConfiguratorState {
    product: Option<Product>,
    attributes: Vec<ProductAttribute>,
    selector: VariationSelector,
    share_notice: Option<&'static str>,
}

impl ConfiguratorState {
    /// Show `product`, restoring selections from `search`.
    ///
    /// Reloading the same payload keeps the current selections; any other
    /// payload resets them. Returns `true` when the state was rebuilt.
    pub fn load(&mut self, product: Product, search: &str) -> bool {
        if self.product.as_ref() == Some(&product) {
            return false;
        }
        self.attributes = product.configurable_attributes();
        self.selector.replace_index(VariationIndex::build(&product));
        self.product = Some(product);
        self.share_notice = None;
        if let Ok(selections) = selection_from_query(search) {
            self.selector.restore(selections);
        }
        true
    }

    /// Drop the product, e.g. while the next one is loading.
    pub fn unload(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Variable products show the configurator; simple products do not.
    #[must_use]
    pub fn is_configurable(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Choose `value` for attribute `slug`. Returns the query string to
    /// write to the address bar.
    pub fn select(&mut self, slug: &str, value: &str) -> String {
        self.selector.select(slug, value);
        self.share_notice = None;
        self.url_query()
    }

    /// Clear every choice. Returns the (empty) query string.
    pub fn reset(&mut self) -> String {
        self.selector.reset();
        self.share_notice = None;
        self.url_query()
    }

    #[must_use]
    pub fn controls(&self) -> Vec<AttributeControl> {
        self.attributes
            .iter()
            .map(|attribute| {
                let slug = attribute.slug();
                AttributeControl {
                    label: attribute.label().to_owned(),
                    widget: WidgetKind::detect(attribute),
                    options: attribute.options.clone(),
                    available: self.selector.available_options(&slug),
                    selected: self.selector.value(&slug).map(str::to_owned),
                    slug,
                }
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.selector.feedback()
    }

    #[must_use]
    pub fn matched(&self) -> Option<&ProductVariation> {
        self.selector.matched()
    }

    /// Price to show: the matched variation's, else the product's range.
    #[must_use]
    pub fn display_price(&self) -> Option<&str> {
        self.matched()
            .and_then(ProductVariation::display_price)
            .or_else(|| self.product.as_ref().and_then(Product::display_price))
    }

    #[must_use]
    pub fn url_query(&self) -> String {
        selection_to_query(self.selector.selections())
    }

    /// Absolute link reproducing this configuration.
    #[must_use]
    pub fn share_link(&self, origin: &str) -> Option<String> {
        let product = self.product.as_ref()?;
        Some(share_url(origin, &format!("/product/{}", product.slug), self.selector.selections()))
    }

    pub fn record_share(&mut self, outcome: ShareOutcome) {
        self.share_notice = outcome.notice();
    }

    #[must_use]
    pub fn share_notice(&self) -> Option<&'static str> {
        self.share_notice
    }
}
