//! Product listing state: the URL-backed query plus the filter debounce.
//!
//! Filter checkboxes update the query (and the URL) immediately but the
//! results are only refetched once the shopper has stopped clicking for
//! [`FILTER_DEBOUNCE_MS`](catalog::debounce::FILTER_DEBOUNCE_MS). Sort and
//! page changes apply at once and cancel any pending filter refresh, since
//! they already carry the latest filters.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use catalog::debounce::Debounce;
use catalog::listing::SortOrder;
use catalog::query::ListingQuery;

/// Live-region text while results are being recomputed.
pub const UPDATING_MESSAGE: &str = "Updating results\u{2026}";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingState {
    /// What the controls and the URL show.
    pub query: ListingQuery,
    /// What the visible results were fetched for.
    pub applied: ListingQuery,
    pub debounce: Debounce,
}

impl ListingState {
    /// Start from the page URL's query string. A malformed query string
    /// starts from the default listing.
    #[must_use]
    pub fn from_search(search: &str) -> Self {
        let query = ListingQuery::parse(search).unwrap_or_default();
        Self { applied: query.clone(), query, debounce: Debounce::default() }
    }

    /// Tick or untick a filter. Returns the debounce deadline to arm a timer for.
    pub fn toggle_filter(&mut self, category: &str, slug: &str, on: bool, now_ms: u64) -> u64 {
        self.query.toggle_filter(category, slug, on);
        self.touch(now_ms)
    }

    /// Drop every filter. Returns the debounce deadline.
    pub fn clear_filters(&mut self, now_ms: u64) -> u64 {
        self.query.clear_filters();
        self.touch(now_ms)
    }

    /// Change sort order and apply immediately.
    pub fn set_sort(&mut self, sort: SortOrder) -> ListingQuery {
        self.query.set_sort(sort);
        self.apply()
    }

    /// Jump to a page and apply immediately.
    pub fn set_page(&mut self, page: u32) -> ListingQuery {
        self.query.set_page(page);
        self.apply()
    }

    /// Called when the debounce timer goes off. Returns the query to fetch
    /// if the deadline has actually passed.
    pub fn fire(&mut self, now_ms: u64) -> Option<ListingQuery> {
        if self.debounce.fire(now_ms) {
            self.applied = self.query.clone();
            Some(self.applied.clone())
        } else {
            None
        }
    }

    /// Follow a URL change made outside the controls (back/forward).
    /// Returns the query to fetch when it differs from what is applied.
    pub fn sync_from_search(&mut self, search: &str) -> Option<ListingQuery> {
        let query = ListingQuery::parse(search).unwrap_or_default();
        if query == self.query {
            return None;
        }
        self.query = query;
        Some(self.apply())
    }

    /// Results lag behind the controls.
    #[must_use]
    pub fn is_updating(&self) -> bool {
        self.debounce.is_pending()
    }

    #[must_use]
    pub fn status_message(&self) -> &'static str {
        if self.is_updating() { UPDATING_MESSAGE } else { "" }
    }

    /// Query string to write to the address bar.
    #[must_use]
    pub fn url_query(&self) -> String {
        self.query.to_query_string()
    }

    fn touch(&mut self, now_ms: u64) -> u64 {
        self.debounce.touch(now_ms);
        self.debounce.due_ms().unwrap_or(now_ms)
    }

    fn apply(&mut self) -> ListingQuery {
        self.debounce.cancel();
        self.applied = self.query.clone();
        self.applied.clone()
    }
}
