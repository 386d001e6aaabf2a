use super::*;

#[test]
fn product_detail_decodes_flattened_product() {
    let detail: ProductDetail = serde_json::from_str(
        r#"{
            "id": "p1", "slug": "zpm", "name": "ZPM",
            "attributes": [{"name": "Display", "options": ["Display", "No Display"]}],
            "configurable": [
                {"name": "Display", "options": ["Display", "No Display"], "variation": true,
                 "slug": "display", "widget": "binary-toggle"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(detail.product.slug, "zpm");
    assert_eq!(detail.product.attributes.len(), 1);
    assert_eq!(detail.configurable[0].widget, WidgetKind::BinaryToggle);
    assert_eq!(detail.configurable[0].attribute.name, "Display");
}

#[test]
fn product_detail_without_configurable_is_simple() {
    let detail: ProductDetail = serde_json::from_str(r#"{"id": "p2", "slug": "thermowell", "name": "Thermowell"}"#).unwrap();
    assert!(detail.configurable.is_empty());
}

#[test]
fn distributor_directory_decodes() {
    let dir: DistributorDirectory = serde_json::from_str(
        r#"{
            "distributors": [{"id": "kele", "name": "Kele", "tier": "platinum", "region": "usa",
                              "location": "National", "website": "https://kele.example"}],
            "counts": {"all": 1, "usa": 1, "europe": 0, "international": 0},
            "label": "1 authorized distributor"
        }"#,
    )
    .unwrap();
    assert_eq!(dir.distributors[0].id, "kele");
    assert_eq!(dir.counts.usa, 1);
}
