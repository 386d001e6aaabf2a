//! Product listing pipeline: filter -> sort -> paginate.
//!
//! DESIGN
//! ======
//! Filters are taxonomy categories mapped to the slugs a shopper ticked. A
//! product passes when, for every active category, it carries at least one of
//! the selected terms (AND across categories, OR within one). Because each
//! category is an independent predicate the result does not depend on the
//! order categories are applied in.
//!
//! Sorting is stable so products with equal keys keep the catalog order.
//! Pagination is 1-based and does not clamp; out-of-range pages come back
//! empty and the caller decides what to show.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::price::parse_price;
use crate::product::Product;
use crate::query::ListingQuery;

/// Products shown per listing page.
pub const DEFAULT_PAGE_SIZE: usize = 18;

/// Taxonomy category -> selected term slugs.
pub type FilterSet = BTreeMap<String, Vec<String>>;

// =============================================================================
// FILTERING
// =============================================================================

/// Whether `product` satisfies every active filter category.
#[must_use]
pub fn matches_filters(product: &Product, filters: &FilterSet) -> bool {
    filters
        .iter()
        .filter(|(_, selected)| !selected.is_empty())
        .all(|(category, selected)| {
            product
                .term_slugs(category)
                .any(|slug| selected.iter().any(|s| s == slug))
        })
}

#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filters: &FilterSet) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_filters(p, filters))
        .collect()
}

// =============================================================================
// SORTING
// =============================================================================

/// Listing sort order as carried in the `sort` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Default,
    NameAsc,
    NameDesc,
    PriceAsc,
    PriceDesc,
    /// Most recently published first.
    Newest,
}

impl SortOrder {
    pub const ALL: [Self; 6] =
        [Self::Default, Self::NameAsc, Self::NameDesc, Self::PriceAsc, Self::PriceDesc, Self::Newest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }

    /// Parse the query-string form. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::NameAsc => "Name: A-Z",
            Self::NameDesc => "Name: Z-A",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Newest => "Newest First",
        }
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

fn compare_prices(a: &Product, b: &Product) -> Ordering {
    parse_price(a.display_price()).total_cmp(&parse_price(b.display_price()))
}

fn compare_newest(a: &Product, b: &Product) -> Ordering {
    match (a.date.as_deref(), b.date.as_deref()) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort.
pub fn sort_products(products: &mut [&Product], order: SortOrder) {
    match order {
        SortOrder::Default => {}
        SortOrder::NameAsc => products.sort_by(|a, b| compare_names(a, b)),
        SortOrder::NameDesc => products.sort_by(|a, b| compare_names(b, a)),
        SortOrder::PriceAsc => products.sort_by(|a, b| compare_prices(a, b)),
        SortOrder::PriceDesc => products.sort_by(|a, b| compare_prices(b, a)),
        SortOrder::Newest => products.sort_by(|a, b| compare_newest(a, b)),
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested.
    pub page: u32,
    /// Always at least 1, even for an empty result.
    pub total_pages: u32,
    pub total_items: usize,
}

/// Slice out page `page` (1-based). Page 0 and pages past the end are empty.
#[must_use]
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = u32::try_from(total_items.div_ceil(page_size).max(1)).unwrap_or(u32::MAX);

    let slice = match (page as usize).checked_sub(1) {
        Some(zero_based) => {
            let start = zero_based.saturating_mul(page_size);
            let end = start.saturating_add(page_size).min(total_items);
            items.get(start..end).unwrap_or(&[])
        }
        None => &[],
    };

    Page { items: slice.to_vec(), page, total_pages, total_items }
}

/// An entry in the pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u32),
    /// Collapsed run of pages ("...").
    Gap,
}

/// Page links to render: every page when there are at most seven, otherwise
/// the first, the last, and the current page with its neighbours.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageLink> {
    if total <= 7 {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = vec![PageLink::Page(1)];
    if current > 3 {
        links.push(PageLink::Gap);
    }
    let start = current.saturating_sub(1).max(2);
    let end = current.saturating_add(1).min(total - 1);
    links.extend((start..=end).map(PageLink::Page));
    if current < total.saturating_sub(2) {
        links.push(PageLink::Gap);
    }
    links.push(PageLink::Page(total));
    links
}

// =============================================================================
// FACETS
// =============================================================================

/// A filter option with the number of products carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    pub slug: String,
    pub name: String,
    pub count: usize,
}

/// Distinct terms of `category` across `products`, most common first.
#[must_use]
pub fn facets(products: &[Product], category: &str) -> Vec<Facet> {
    let mut by_slug: HashMap<&str, Facet> = HashMap::new();
    for term in products
        .iter()
        .filter_map(|p| p.taxonomies.get(category))
        .flatten()
    {
        by_slug
            .entry(term.slug.as_str())
            .or_insert_with(|| Facet { slug: term.slug.clone(), name: term.name.clone(), count: 0 })
            .count += 1;
    }

    let mut out: Vec<Facet> = by_slug.into_values().collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out
}

// =============================================================================
// PIPELINE
// =============================================================================

/// Everything the listing page renders for one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub products: Vec<Product>,
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub sort: SortOrder,
    /// Category -> facets, computed over the unfiltered product set.
    pub facets: BTreeMap<String, Vec<Facet>>,
}

impl ListingPage {
    /// `"Page 2 of 2"`.
    #[must_use]
    pub fn summary_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    #[must_use]
    pub fn links(&self) -> Vec<PageLink> {
        page_window(self.page, self.total_pages)
    }
}

/// Filter, sort and paginate `products` for `query`.
#[must_use]
pub fn run_listing(products: &[Product], query: &ListingQuery, page_size: usize) -> ListingPage {
    let mut visible = filter_products(products, &query.filters);
    sort_products(&mut visible, query.sort);
    let page = paginate(&visible, query.page, page_size);

    let mut categories: Vec<&str> = products
        .iter()
        .flat_map(|p| p.taxonomies.keys().map(String::as_str))
        .collect();
    categories.sort_unstable();
    categories.dedup();

    ListingPage {
        products: page.items.into_iter().cloned().collect(),
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        sort: query.sort,
        facets: categories
            .into_iter()
            .map(|c| (c.to_owned(), facets(products, c)))
            .collect(),
    }
}
