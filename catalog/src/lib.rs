//! Storefront catalog logic shared by the server and the browser client.
//!
//! This crate owns the product data model and every piece of storefront
//! behavior that can be expressed without I/O: resolving a shopper's attribute
//! selection to a single product variation, filtering / sorting / paginating a
//! product listing, the URL query-string contract both sides speak, and the
//! hover-intent state machine behind the header mega menu. Nothing here reads
//! a clock; time-dependent code takes `now_ms` from the caller so it can run
//! identically under Tokio, in WASM, and in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`product`] | Catalog snapshot types (products, attributes, variations) |
//! | [`variation`] | Variation index, matcher, and stateful selector |
//! | [`listing`] | Taxonomy filtering, sorting, pagination, facets |
//! | [`price`] | Currency string parsing and formatting |
//! | [`query`] | URL query-string encoding of listing and selection state |
//! | [`menu`] | Mega-menu hover-intent state machine and navigation config |
//! | [`debounce`] | Deadline-based debounce used for listing recomputation |
//! | [`widget`] | Selector widget detection for product attributes |
//! | [`shortlist`] | Product comparison and recently-viewed lists |
//! | [`distributor`] | Distributor directory search |
//! | [`share`] | Shareable configuration links |

pub mod debounce;
pub mod distributor;
pub mod listing;
pub mod menu;
pub mod price;
pub mod product;
pub mod query;
pub mod share;
pub mod shortlist;
pub mod variation;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;
