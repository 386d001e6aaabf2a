use super::*;

// =============================================================
// Helpers
// =============================================================

fn sensor() -> Product {
    serde_json::from_value(serde_json::json!({
        "id": "p-rts",
        "slug": "room-temperature-sensor",
        "name": "Room Temperature Sensor",
        "price": "$64.00 - $98.00",
        "attributes": [
            {"name": "Color", "options": ["Bright White", "Black"]},
            {"name": "Output", "options": ["10K-2 Thermistor", "4-20mA"]},
            {"name": "Warranty", "options": ["5 Years"], "variation": false}
        ],
        "variations": [
            {"id": "v1", "sku": "RTS-01", "price": "$64.00", "attributes": {"Color": "Bright White", "Output": "10K-2 Thermistor"}},
            {"id": "v2", "sku": "RTS-02", "price": "$98.00", "attributes": {"Color": "Bright White", "Output": "4-20mA"}},
            {"id": "v3", "sku": "RTS-03", "price": "$64.00", "attributes": {"Color": "Black", "Output": "10K-2 Thermistor"}}
        ]
    }))
    .unwrap()
}

fn simple() -> Product {
    serde_json::from_value(serde_json::json!({
        "id": "p-tw", "slug": "thermowell", "name": "Thermowell", "price": "$28.00"
    }))
    .unwrap()
}

fn loaded(search: &str) -> ConfiguratorState {
    let mut state = ConfiguratorState::default();
    assert!(state.load(sensor(), search));
    state
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_without_query_prompts_for_every_attribute() {
    let state = loaded("");
    assert!(state.is_configurable());
    assert_eq!(state.feedback(), Feedback::Prompt { remaining: 2 });
    assert_eq!(state.display_price(), Some("$64.00 - $98.00"));
}

#[test]
fn load_restores_shared_configuration() {
    let state = loaded("?color=Black&output=10K-2+Thermistor");
    assert_eq!(state.matched().map(|v| v.sku.as_str()), Some("RTS-03"));
    assert_eq!(state.display_price(), Some("$64.00"));
}

#[test]
fn load_ignores_unknown_values_in_link() {
    let state = loaded("color=Purple&output=4-20mA");
    assert_eq!(state.feedback(), Feedback::Prompt { remaining: 1 });
    assert_eq!(state.url_query(), "output=4-20mA");
}

#[test]
fn reloading_same_payload_keeps_selections() {
    let mut state = loaded("");
    state.select("color", "Black");
    assert!(!state.load(sensor(), ""));
    assert_eq!(state.url_query(), "color=Black");
}

#[test]
fn different_payload_resets_selections() {
    let mut state = loaded("");
    state.select("color", "Black");
    let mut changed = sensor();
    changed.variations.pop();
    assert!(state.load(changed, ""));
    assert_eq!(state.url_query(), "");
    assert_eq!(state.feedback(), Feedback::Prompt { remaining: 2 });
}

#[test]
fn simple_product_has_no_controls() {
    let mut state = ConfiguratorState::default();
    state.load(simple(), "color=Black");
    assert!(!state.is_configurable());
    assert!(state.controls().is_empty());
    assert_eq!(state.display_price(), Some("$28.00"));
}

// =============================================================
// Selecting
// =============================================================

#[test]
fn select_returns_query_for_address_bar() {
    let mut state = loaded("");
    assert_eq!(state.select("color", "Bright White"), "color=Bright+White");
    assert_eq!(state.select("output", "4-20mA"), "color=Bright+White&output=4-20mA");
    assert_eq!(state.matched().map(|v| v.sku.as_str()), Some("RTS-02"));
}

#[test]
fn unsold_combination_is_invalid_configuration() {
    let mut state = loaded("");
    state.select("color", "Black");
    state.select("output", "4-20mA");
    assert_eq!(state.feedback(), Feedback::InvalidConfiguration);
    assert!(state.matched().is_none());
}

#[test]
fn changing_one_attribute_after_match_re_resolves() {
    let mut state = loaded("color=Black&output=10K-2+Thermistor");
    state.select("color", "Bright White");
    assert_eq!(state.matched().map(|v| v.sku.as_str()), Some("RTS-01"));
    state.select("output", "");
    assert!(state.matched().is_none());
}

#[test]
fn controls_reflect_widgets_and_availability() {
    let mut state = loaded("");
    state.select("color", "Black");
    let controls = state.controls();
    assert_eq!(controls.len(), 2);
    assert_eq!(controls[0].widget, WidgetKind::ColorSwatch);
    assert_eq!(controls[0].selected.as_deref(), Some("Black"));
    assert_eq!(controls[1].available, vec!["10K-2 Thermistor"]);
}

#[test]
fn reset_clears_everything() {
    let mut state = loaded("color=Black");
    assert_eq!(state.reset(), "");
    assert_eq!(state.feedback(), Feedback::Prompt { remaining: 2 });
}

// =============================================================
// Sharing
// =============================================================

#[test]
fn share_link_carries_selection() {
    let state = loaded("color=Black");
    assert_eq!(
        state.share_link("https://shop.example/").as_deref(),
        Some("https://shop.example/product/room-temperature-sensor?color=Black")
    );
}

#[test]
fn copied_share_shows_notice_until_next_change() {
    let mut state = loaded("");
    state.record_share(ShareOutcome::Copied);
    assert_eq!(state.share_notice(), Some("Link copied to clipboard!"));
    state.select("color", "Black");
    assert_eq!(state.share_notice(), None);
}

#[test]
fn share_link_needs_a_product() {
    assert_eq!(ConfiguratorState::default().share_link("https://shop.example"), None);
}
