#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod source;
mod state;

use crate::services::catalog::CatalogIndex;
use crate::services::refresh;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let source = source::from_config(&config.source).expect("catalog source init failed");

    // Start even if the first load fails; the refresh task may recover it.
    let index = match refresh::load_index(source.as_ref()).await {
        Ok(index) => index,
        Err(e) => {
            tracing::warn!(error = %e, source = %source.describe(), "initial catalog load failed; starting empty");
            CatalogIndex::default()
        }
    };

    let state = state::AppState::new(index, config.page_size);

    let _refresh = config
        .refresh_interval
        .map(|every| refresh::spawn_refresh_task(state.clone(), source.clone(), every));

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos site unavailable; serving API only");
            routes::app(state)
        }
    };

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "storefront listening");
    axum::serve(listener, app).await.expect("server failed");
}
