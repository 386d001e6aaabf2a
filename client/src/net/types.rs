//! Response payloads of the storefront API.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON responses. Catalog model types (products,
//! listing pages, nav items, distributors) come straight from the `catalog`
//! crate; only the API wrappers live here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use catalog::distributor::{Distributor, RegionCounts};
use catalog::product::{Product, ProductAttribute};
use catalog::widget::WidgetKind;
use serde::{Deserialize, Serialize};

/// A variation attribute with the widget the server picked for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurableAttribute {
    #[serde(flatten)]
    pub attribute: ProductAttribute,
    pub slug: String,
    pub widget: WidgetKind,
}

/// `GET /api/products/{slug}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub configurable: Vec<ConfigurableAttribute>,
}

/// `GET /api/distributors`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributorDirectory {
    pub distributors: Vec<Distributor>,
    pub counts: RegionCounts,
    pub label: String,
}
