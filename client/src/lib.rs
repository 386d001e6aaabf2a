//! # client
//!
//! Leptos + WASM storefront for the sensor catalog.
//!
//! This crate contains pages, components, client state, and the REST
//! helpers for the product listing, product configurator, mega-menu header
//! and distributor locator. Matching, filtering and menu timing come from
//! the `catalog` crate; this crate wires them to signals, timers and the URL.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic and log hooks, then hydrate the
/// server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
