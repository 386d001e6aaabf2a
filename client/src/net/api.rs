//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are only
//! fetched from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so a failed fetch shows an
//! empty or error state without crashing hydration. Failures are logged at
//! warn level.

#![allow(clippy::unused_async)]

use catalog::listing::ListingPage;
use catalog::menu::NavItem;
use catalog::query::{ListingQuery, href};

use super::types::{DistributorDirectory, ProductDetail};

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = match gloo_net::http::Request::get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            log::warn!("GET {url} failed: {e}");
            return None;
        }
    };
    if !resp.ok() {
        log::warn!("GET {url} returned {}", resp.status());
        return None;
    }
    match resp.json::<T>().await {
        Ok(body) => Some(body),
        Err(e) => {
            log::warn!("GET {url} decode failed: {e}");
            None
        }
    }
}

/// Fetch one listing page from `/api/products?<query>`.
pub async fn fetch_listing(query: &ListingQuery) -> Option<ListingPage> {
    let url = href("/api/products", &query.to_query_string());
    #[cfg(feature = "hydrate")]
    {
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        None
    }
}

/// Fetch a product with its configurable attributes from `/api/products/{slug}`.
pub async fn fetch_product(slug: &str) -> Option<ProductDetail> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/products/{slug}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        None
    }
}

/// Fetch the header navigation from `/api/nav`.
pub async fn fetch_nav() -> Option<Vec<NavItem>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/nav").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the whole distributor directory from `/api/distributors`.
pub async fn fetch_distributors() -> Option<DistributorDirectory> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/distributors").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
