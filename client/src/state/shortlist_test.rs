use super::*;

fn summary(id: &str) -> ProductSummary {
    ProductSummary {
        id: id.to_owned(),
        slug: format!("sensor-{id}"),
        name: format!("Sensor {id}"),
        price: Some("$10.00".to_owned()),
        image: None,
    }
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_missing_storage_is_empty() {
    let (state, issues) = ShortlistState::restore(None, None);
    assert_eq!(state, ShortlistState::default());
    assert!(issues.is_empty());
}

#[test]
fn restore_corrupt_list_starts_empty_and_reports_it() {
    let mut saved = ShortlistState::default();
    saved.recent.record(summary("a"), 5);
    let (state, issues) = ShortlistState::restore(Some("{not json"), Some(&saved.recent_json()));
    assert!(state.comparison.is_empty());
    assert_eq!(state.recent.len(), 1);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].key, catalog::shortlist::COMPARISON_STORAGE_KEY);
}

#[test]
fn stored_lists_restore() {
    let mut saved = ShortlistState::default();
    saved.toggle_compare(summary("a"));
    saved.toggle_compare(summary("b"));
    saved.recent.record(summary("c"), 1);
    let (state, issues) = ShortlistState::restore(Some(&saved.comparison_json()), Some(&saved.recent_json()));
    assert!(issues.is_empty());
    assert_eq!(state, saved);
}

// =============================================================
// Comparison
// =============================================================

#[test]
fn toggle_compare_adds_then_removes() {
    let mut state = ShortlistState::default();
    assert_eq!(state.toggle_compare(summary("a")), None);
    assert!(state.comparison.contains("a"));
    assert_eq!(state.toggle_compare(summary("a")), None);
    assert!(state.comparison.is_empty());
}

#[test]
fn toggle_compare_reports_full() {
    let mut state = ShortlistState::default();
    for id in ["a", "b", "c"] {
        state.toggle_compare(summary(id));
    }
    assert_eq!(state.toggle_compare(summary("d")), Some(COMPARE_FULL_MESSAGE));
    assert_eq!(state.compare_label(), "Compare (3/3)");
}
