//! App-wide shortlist: product comparison and recently viewed history.
//!
//! Both lists persist in local storage as JSON. A corrupt or outdated
//! stored value starts the list empty instead of failing the page.

#[cfg(test)]
#[path = "shortlist_test.rs"]
mod shortlist_test;

use catalog::shortlist::{AddOutcome, Comparison, MAX_COMPARE, ProductSummary, RecentlyViewed};

/// Notice shown when the comparison is already full.
pub const COMPARE_FULL_MESSAGE: &str = "You can compare up to 3 products";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShortlistState {
    pub comparison: Comparison,
    pub recent: RecentlyViewed,
}

/// A stored list that could not be decoded.
#[derive(Debug)]
pub struct RestoreIssue {
    pub key: &'static str,
    pub error: serde_json::Error,
}

impl ShortlistState {
    /// Rebuild from stored JSON. Lists that fail to decode start empty and
    /// are reported back for logging.
    #[must_use]
    pub fn restore(comparison: Option<&str>, recent: Option<&str>) -> (Self, Vec<RestoreIssue>) {
        let mut issues = Vec::new();
        let comparison = match comparison.map(Comparison::from_json) {
            Some(Ok(list)) => list,
            Some(Err(error)) => {
                issues.push(RestoreIssue { key: catalog::shortlist::COMPARISON_STORAGE_KEY, error });
                Comparison::default()
            }
            None => Comparison::default(),
        };
        let recent = match recent.map(RecentlyViewed::from_json) {
            Some(Ok(list)) => list,
            Some(Err(error)) => {
                issues.push(RestoreIssue { key: catalog::shortlist::RECENTLY_VIEWED_STORAGE_KEY, error });
                RecentlyViewed::default()
            }
            None => RecentlyViewed::default(),
        };
        (Self { comparison, recent }, issues)
    }

    /// Add or remove a product from the comparison. Returns a notice when
    /// the product could not be added.
    pub fn toggle_compare(&mut self, product: ProductSummary) -> Option<&'static str> {
        if self.comparison.remove(&product.id) {
            return None;
        }
        match self.comparison.add(product) {
            AddOutcome::Added | AddOutcome::AlreadyPresent => None,
            AddOutcome::Full => Some(COMPARE_FULL_MESSAGE),
        }
    }

    #[must_use]
    pub fn compare_label(&self) -> String {
        format!("Compare ({}/{MAX_COMPARE})", self.comparison.len())
    }

    #[must_use]
    pub fn comparison_json(&self) -> String {
        serde_json::to_string(&self.comparison).unwrap_or_default()
    }

    #[must_use]
    pub fn recent_json(&self) -> String {
        serde_json::to_string(&self.recent).unwrap_or_default()
    }
}
