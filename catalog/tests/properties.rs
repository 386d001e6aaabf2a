use std::collections::BTreeMap;

use catalog::listing::{FilterSet, filter_products, paginate};
use catalog::menu::{MegaMenu, MenuKey};
use catalog::price::parse_price;
use catalog::product::{Product, ProductAttribute, ProductVariation, StockStatus, Term};
use catalog::query::ListingQuery;
use catalog::variation::{Resolution, VariationIndex, VariationSelector};
use proptest::prelude::*;

const OPTIONS: [&str; 3] = ["Low", "Mid", "High"];
const MAX_ATTRIBUTES: usize = 3;
const CATEGORIES: [&str; 3] = ["application", "display", "enclosure"];
const TERMS: [&str; 4] = ["alpha", "beta", "gamma", "delta"];

// =============================================================================
// FIXTURES
// =============================================================================

fn attribute_name(i: usize) -> String {
    format!("Attribute {i}")
}

fn bare_product(slug: String) -> Product {
    Product {
        id: slug.clone(),
        name: slug.to_uppercase(),
        slug,
        price: None,
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

/// Every combination of option indices for `k` attributes.
fn combinations(k: usize) -> Vec<Vec<usize>> {
    let total = 3usize.pow(u32::try_from(k).unwrap());
    (0..total)
        .map(|mut n| {
            (0..k)
                .map(|_| {
                    let digit = n % 3;
                    n /= 3;
                    digit
                })
                .collect()
        })
        .collect()
}

/// `k` attributes of three options each; `sold[i]` says whether combination
/// `i` exists as a variation.
fn configurable(k: usize, sold: &[bool]) -> Product {
    let mut p = bare_product("configurable".into());
    p.attributes = (0..k)
        .map(|i| ProductAttribute::new(attribute_name(i), &OPTIONS))
        .collect();
    p.variations = combinations(k)
        .into_iter()
        .zip(sold)
        .filter(|(_, sold)| **sold)
        .enumerate()
        .map(|(n, (combo, _))| ProductVariation {
            id: format!("v{n}"),
            sku: format!("SKU-{n}"),
            part_number: None,
            price: Some("$10.00".into()),
            regular_price: None,
            stock_status: StockStatus::InStock,
            attributes: combo
                .iter()
                .enumerate()
                .map(|(i, v)| (attribute_name(i), OPTIONS[*v].to_owned()))
                .collect(),
        })
        .collect();
    p
}

fn is_sold(k: usize, sold: &[bool], combo: &[usize]) -> bool {
    combinations(k)
        .iter()
        .position(|c| c == combo)
        .is_some_and(|i| sold[i])
}

fn tagged_products() -> impl Strategy<Value = Vec<Product>> {
    let terms = proptest::collection::vec(proptest::collection::vec(0..TERMS.len(), 0..3), CATEGORIES.len());
    proptest::collection::vec(terms, 0..24).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(n, per_category)| {
                let mut p = bare_product(format!("p{n}"));
                for (category, picks) in CATEGORIES.iter().zip(per_category) {
                    p.taxonomies.insert(
                        (*category).to_owned(),
                        picks
                            .into_iter()
                            .map(|t| Term { slug: TERMS[t].to_owned(), name: TERMS[t].to_owned() })
                            .collect(),
                    );
                }
                p
            })
            .collect()
    })
}

fn filter_set() -> impl Strategy<Value = FilterSet> {
    let values = proptest::collection::vec((0..TERMS.len()).prop_map(|t| TERMS[t].to_owned()), 0..3);
    proptest::collection::vec(proptest::option::of(values), CATEGORIES.len()).prop_map(|per_category| {
        CATEGORIES
            .iter()
            .zip(per_category)
            .filter_map(|(category, values)| values.map(|v| ((*category).to_owned(), v)))
            .collect()
    })
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn incomplete_selection_never_matches(
        k in 1..=MAX_ATTRIBUTES,
        sold in proptest::collection::vec(any::<bool>(), 27),
        picks in proptest::collection::vec(proptest::option::of(0..3usize), MAX_ATTRIBUTES),
    ) {
        let picks = &picks[..k];
        prop_assume!(picks.iter().any(Option::is_none));

        let mut selector = VariationSelector::new(VariationIndex::build(&configurable(k, &sold)));
        for (i, pick) in picks.iter().enumerate() {
            if let Some(v) = pick {
                selector.select(&attribute_name(i), OPTIONS[*v]);
            }
        }
        let missing = picks.iter().filter(|p| p.is_none()).count();
        prop_assert_eq!(selector.resolution(), Resolution::Incomplete { missing });
        prop_assert!(selector.matched().is_none());
    }

    #[test]
    fn complete_selection_matches_exactly_when_sold(
        k in 1..=MAX_ATTRIBUTES,
        sold in proptest::collection::vec(any::<bool>(), 27),
        picks in proptest::collection::vec(0..3usize, MAX_ATTRIBUTES),
    ) {
        let picks = &picks[..k];
        let mut selector = VariationSelector::new(VariationIndex::build(&configurable(k, &sold)));
        for (i, v) in picks.iter().enumerate() {
            selector.select(&attribute_name(i), OPTIONS[*v]);
        }

        if is_sold(k, &sold, picks) {
            let matched = selector.matched();
            prop_assert!(matched.is_some());
            for (i, v) in picks.iter().enumerate() {
                prop_assert_eq!(
                    matched.and_then(|m| m.attributes.get(&attribute_name(i))).map(String::as_str),
                    Some(OPTIONS[*v])
                );
            }
        } else {
            prop_assert_eq!(selector.resolution(), Resolution::Unmatched);
        }
    }

    #[test]
    fn reselecting_one_attribute_reevaluates(
        sold in proptest::collection::vec(any::<bool>(), 27),
        first in proptest::collection::vec(0..3usize, 2),
        changed in 0..3usize,
    ) {
        let product = configurable(2, &sold);
        let mut selector = VariationSelector::new(VariationIndex::build(&product));
        selector.select(&attribute_name(0), OPTIONS[first[0]]);
        selector.select(&attribute_name(1), OPTIONS[first[1]]);
        selector.select(&attribute_name(1), OPTIONS[changed]);

        let fresh = VariationIndex::build(&product).resolve(selector.selections());
        prop_assert_eq!(selector.resolution(), fresh);
    }

    #[test]
    fn filter_categories_commute(products in tagged_products(), filters in filter_set()) {
        let together: Vec<String> = filter_products(&products, &filters).iter().map(|p| p.slug.clone()).collect();

        let mut narrowed = products.clone();
        for (category, values) in filters.iter().rev() {
            let single: FilterSet = std::iter::once((category.clone(), values.clone())).collect();
            narrowed = filter_products(&narrowed, &single).into_iter().cloned().collect();
        }
        let stepwise: Vec<String> = narrowed.iter().map(|p| p.slug.clone()).collect();

        prop_assert_eq!(together, stepwise);
    }

    #[test]
    fn pages_partition_the_result(len in 0..60usize, page_size in 1..20usize) {
        let items: Vec<usize> = (0..len).collect();
        let first = paginate(&items, 1, page_size);
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            seen.extend(paginate(&items, page, page_size).items);
        }
        prop_assert_eq!(seen, items);
    }

    #[test]
    fn parse_price_is_total(raw in ".*") {
        prop_assert!(parse_price(Some(raw.as_str())).is_finite());
    }

    #[test]
    fn listing_query_parse_never_panics(raw in "[a-z=&,%0-9+-]{0,64}") {
        if let Ok(q) = ListingQuery::parse(&raw) {
            prop_assert!(q.page >= 1);
        }
    }

    #[test]
    fn mega_menu_shows_at_most_the_last_touched_item(
        events in proptest::collection::vec((0..5u8, 0..4usize, 0..200u64), 0..40),
    ) {
        let mut menu = MegaMenu::new();
        let mut now = 0u64;
        for (kind, index, gap) in events {
            now += gap;
            menu.advance(now);
            match kind {
                0 => menu.pointer_enter(index, now),
                1 => menu.pointer_leave(now),
                2 => menu.toggle(index),
                3 => { menu.key(MenuKey::Escape); }
                _ => menu.outside_click(),
            }
            if let Some(deadline) = menu.next_deadline() {
                prop_assert!(deadline > now);
            }
        }
        menu.close_now();
        prop_assert_eq!(menu.open_index(), None);
    }
}
