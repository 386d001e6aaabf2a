//! URL query-string contract shared by the listing API and the browser.
//!
//! Listing state:
//!
//! ```text
//! ?application=data-centers,healthcare&display=lcd&sort=price-asc&page=2
//! ```
//!
//! Every key other than `sort` and `page` is a taxonomy category whose value
//! is a comma-separated list of term slugs. `sort=default` and `page=1` are
//! implied and never written. Product configuration links carry one pair per
//! variation attribute slug (`?pressure-range=Low+Range&display=Display`).

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::listing::{FilterSet, SortOrder};
use crate::product::attribute_slug;
use crate::variation::SelectedAttributes;

const SORT_KEY: &str = "sort";
const PAGE_KEY: &str = "page";

/// Error returned when a query string cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("malformed query string: {0}")]
    Decode(#[from] serde_urlencoded::de::Error),
}

fn decode_pairs(raw: &str) -> Result<Vec<(String, String)>, QueryError> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    Ok(serde_urlencoded::from_str::<Vec<(String, String)>>(raw)?)
}

fn encode_pairs(pairs: &[(String, String)]) -> String {
    // A flat sequence of string pairs has no unrepresentable shapes.
    serde_urlencoded::to_string(pairs).unwrap_or_default()
}

/// Append `query` to `path` when it is non-empty.
#[must_use]
pub fn href(path: &str, query: &str) -> String {
    if query.is_empty() { path.to_owned() } else { format!("{path}?{query}") }
}

// =============================================================================
// LISTING
// =============================================================================

/// Listing state carried in the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    pub filters: FilterSet,
    pub sort: SortOrder,
    /// 1-based.
    pub page: u32,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self { filters: FilterSet::new(), sort: SortOrder::Default, page: 1 }
    }
}

impl ListingQuery {
    /// Decode a query string (with or without the leading `?`).
    ///
    /// Unknown sort values fall back to the default order; a missing, zero or
    /// non-numeric page is page 1. Repeated filter keys are merged.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Decode`] if the percent-encoding is invalid.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let mut query = Self::default();
        for (key, value) in decode_pairs(raw)? {
            match key.as_str() {
                SORT_KEY => query.sort = SortOrder::parse(value.trim()).unwrap_or_default(),
                PAGE_KEY => {
                    query.page = value
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|p| *p > 0)
                        .unwrap_or(1);
                }
                _ => {
                    let values = query.filters.entry(key).or_default();
                    for slug in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                        if !values.iter().any(|v| v == slug) {
                            values.push(slug.to_owned());
                        }
                    }
                }
            }
        }
        query.filters.retain(|_, values| !values.is_empty());
        Ok(query)
    }

    /// Encode back to a query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(category, values)| (category.clone(), values.join(",")))
            .collect();
        if self.sort != SortOrder::Default {
            pairs.push((SORT_KEY.to_owned(), self.sort.as_str().to_owned()));
        }
        if self.page > 1 {
            pairs.push((PAGE_KEY.to_owned(), self.page.to_string()));
        }
        encode_pairs(&pairs)
    }

    #[must_use]
    pub fn is_active(&self, category: &str, slug: &str) -> bool {
        self.filters
            .get(category)
            .is_some_and(|values| values.iter().any(|v| v == slug))
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.values().map(Vec::len).sum()
    }

    /// Tick or untick one filter value. Returns to page 1.
    pub fn toggle_filter(&mut self, category: &str, slug: &str, on: bool) {
        let values = self.filters.entry(category.to_owned()).or_default();
        if on {
            if !values.iter().any(|v| v == slug) {
                values.push(slug.to_owned());
            }
        } else {
            values.retain(|v| v != slug);
        }
        if values.is_empty() {
            self.filters.remove(category);
        }
        self.page = 1;
    }

    /// Drop every filter. Returns to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Change the sort order. Returns to page 1.
    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Keep only filter categories the catalog knows about.
    pub fn retain_categories(&mut self, known: &[String]) {
        self.filters.retain(|category, _| known.iter().any(|k| k == category));
    }
}

// =============================================================================
// PRODUCT CONFIGURATION
// =============================================================================

/// Read a shared configuration link. Keys are normalized to attribute slugs;
/// empty values are dropped. Later duplicates win.
///
/// # Errors
///
/// Returns [`QueryError::Decode`] if the percent-encoding is invalid.
pub fn selection_from_query(raw: &str) -> Result<SelectedAttributes, QueryError> {
    Ok(decode_pairs(raw)?
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (attribute_slug(&key), value))
        .collect())
}

/// Encode a selection as a query string without the leading `?`.
#[must_use]
pub fn selection_to_query(selections: &SelectedAttributes) -> String {
    let pairs: Vec<(String, String)> = selections
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    encode_pairs(&pairs)
}
