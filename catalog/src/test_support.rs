//! Fixtures shared by the unit tests.

use std::collections::BTreeMap;

use crate::product::{Product, ProductAttribute, ProductVariation, StockStatus, Term};

/// A variation with the given display-name -> value pairs.
pub fn variation(id: &str, sku: &str, price: &str, pairs: &[(&str, &str)]) -> ProductVariation {
    ProductVariation {
        id: id.to_owned(),
        sku: sku.to_owned(),
        part_number: None,
        price: Some(price.to_owned()),
        regular_price: None,
        stock_status: StockStatus::InStock,
        attributes: pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect(),
    }
}

/// A bare product with no attributes or taxonomies.
pub fn product(slug: &str, name: &str, price: Option<&str>) -> Product {
    Product {
        id: format!("id-{slug}"),
        slug: slug.to_owned(),
        name: name.to_owned(),
        price: price.map(str::to_owned),
        regular_price: None,
        date: None,
        image: None,
        short_description: None,
        categories: Vec::new(),
        taxonomies: BTreeMap::new(),
        attributes: Vec::new(),
        variations: Vec::new(),
    }
}

/// Attach taxonomy terms (slugs double as names) to a product.
pub fn with_terms(mut p: Product, category: &str, slugs: &[&str]) -> Product {
    p.taxonomies.insert(
        category.to_owned(),
        slugs
            .iter()
            .map(|s| Term { slug: (*s).to_owned(), name: (*s).replace('-', " ") })
            .collect(),
    );
    p
}

/// Color {Red, Blue} x Size {S, M}, with only (Red, S) and (Blue, M) sold.
pub fn color_size_product() -> Product {
    let mut p = product("widget", "Widget", Some("$10.00"));
    p.attributes = vec![
        ProductAttribute::new("Color", &["Red", "Blue"]),
        ProductAttribute::new("Size", &["S", "M"]),
    ];
    p.variations = vec![
        variation("v1", "SKU1", "$10.00", &[("Color", "Red"), ("Size", "S")]),
        variation("v2", "SKU2", "$12.00", &[("Color", "Blue"), ("Size", "M")]),
    ];
    p
}

/// A duct pressure sensor with three variation attributes and a descriptive one.
pub fn pressure_sensor() -> Product {
    let mut p = product("zpm-pressure-sensor", "ZPM Pressure Sensor", Some("$189.00"));
    let mut descriptive = ProductAttribute::new("Warranty", &["5 Years"]);
    descriptive.variation = false;
    p.attributes = vec![
        ProductAttribute::new("Pressure Range", &["Standard Range", "Low Range"]),
        ProductAttribute::new("Display", &["Display", "No Display"]),
        ProductAttribute::new("Static Pressure Tube", &["Included", "Not Included"]),
        descriptive,
    ];
    let mut vars = Vec::new();
    let mut n = 0;
    for range in ["Standard Range", "Low Range"] {
        for display in ["Display", "No Display"] {
            for tube in ["Included", "Not Included"] {
                n += 1;
                vars.push(variation(
                    &format!("zpm-{n}"),
                    &format!("ZPM-{n:02}"),
                    "$189.00",
                    &[("Pressure Range", range), ("Display", display), ("Static Pressure Tube", tube)],
                ));
            }
        }
    }
    p.variations = vars;
    p
}
