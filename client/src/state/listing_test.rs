use super::*;
use catalog::debounce::FILTER_DEBOUNCE_MS;

// =============================================================
// From URL
// =============================================================

#[test]
fn from_search_applies_url_state() {
    let state = ListingState::from_search("?display=lcd&page=2");
    assert_eq!(state.query.page, 2);
    assert_eq!(state.applied, state.query);
    assert!(!state.is_updating());
}

#[test]
fn from_search_without_query_is_default() {
    assert_eq!(ListingState::from_search(""), ListingState::default());
}

// =============================================================
// Debounced filters
// =============================================================

#[test]
fn filter_change_is_debounced() {
    let mut state = ListingState::from_search("page=3");
    let due = state.toggle_filter("display", "lcd", true, 1_000);
    assert_eq!(due, 1_000 + FILTER_DEBOUNCE_MS);
    assert!(state.is_updating());
    assert_eq!(state.status_message(), UPDATING_MESSAGE);
    assert_eq!(state.url_query(), "display=lcd");
    assert_eq!(state.applied.page, 3);
}

#[test]
fn rapid_filter_changes_fetch_once_with_latest_query() {
    let mut state = ListingState::default();
    state.toggle_filter("display", "lcd", true, 0);
    state.toggle_filter("application", "healthcare", true, 200);
    assert_eq!(state.fire(300), None);
    let fetched = state.fire(500).unwrap();
    assert_eq!(fetched.active_filter_count(), 2);
    assert!(!state.is_updating());
    assert_eq!(state.fire(900), None);
}

#[test]
fn clear_filters_is_debounced_too() {
    let mut state = ListingState::from_search("display=lcd");
    state.clear_filters(0);
    assert!(state.is_updating());
    assert!(state.fire(FILTER_DEBOUNCE_MS).unwrap().filters.is_empty());
}

// =============================================================
// Immediate changes
// =============================================================

#[test]
fn sort_applies_now_and_cancels_pending_filter_refresh() {
    let mut state = ListingState::from_search("page=2");
    state.toggle_filter("display", "lcd", true, 0);
    let applied = state.set_sort(SortOrder::PriceDesc);
    assert_eq!(applied.sort, SortOrder::PriceDesc);
    assert_eq!(applied.page, 1);
    assert!(applied.is_active("display", "lcd"));
    assert!(!state.is_updating());
    assert_eq!(state.fire(1_000), None);
}

#[test]
fn page_change_applies_now() {
    let mut state = ListingState::default();
    assert_eq!(state.set_page(2).page, 2);
    assert_eq!(state.url_query(), "page=2");
}

#[test]
fn sync_from_search_follows_history_navigation() {
    let mut state = ListingState::from_search("page=2");
    assert_eq!(state.sync_from_search("page=2"), None);
    let applied = state.sync_from_search("").unwrap();
    assert_eq!(applied, ListingQuery::default());
}
