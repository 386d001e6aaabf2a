//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API and stitches it with Leptos SSR rendering
//! under a single Axum router. Storefront pages (`/`, `/products`,
//! `/product/{slug}`, `/where-to-buy`) are rendered by the Leptos app and
//! hydrate against the same `/api` endpoints.

pub mod distributors;
pub mod nav;
pub mod products;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Shared API routes used by the SSR app and the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/products", get(products::list_products))
        .route("/api/products/{slug}", get(products::get_product))
        .route("/api/products/{slug}/variation", get(products::resolve_variation))
        .route("/api/nav", get(nav::nav))
        .route("/api/distributors", get(distributors::list_distributors))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// API-only router, used when the Leptos site configuration is unavailable.
pub fn app(state: AppState) -> Router {
    api_routes(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Leptos SSR frontend: API routes + storefront pages + `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
