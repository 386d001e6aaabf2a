//! Catalog refresh: initial load plus periodic background reloads.
//!
//! ERROR HANDLING
//! ==============
//! A failed reload keeps serving the previous snapshot and logs a warning.
//! Stale catalog data is acceptable; an empty storefront is not.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::services::catalog::CatalogIndex;
use crate::source::{CatalogSource, SourceError};
use crate::state::AppState;

/// Load a snapshot and build its index.
///
/// # Errors
///
/// Propagates the source's [`SourceError`].
pub async fn load_index(source: &dyn CatalogSource) -> Result<CatalogIndex, SourceError> {
    let catalog = source.load().await?;
    let index = CatalogIndex::build(catalog);
    info!(
        source = %source.describe(),
        products = index.product_count(),
        nav_items = index.nav().len(),
        distributors = index.catalog().distributors.len(),
        "catalog loaded"
    );
    Ok(index)
}

/// Reload once and swap the new index into `state`. Returns the product count.
///
/// # Errors
///
/// Propagates the source's [`SourceError`]; `state` is left untouched.
pub async fn refresh_once(state: &AppState, source: &dyn CatalogSource) -> Result<usize, SourceError> {
    let index = load_index(source).await?;
    let products = index.product_count();
    state.replace(index).await;
    Ok(products)
}

/// Spawn the periodic reload task. Returns a handle for shutdown.
pub fn spawn_refresh_task(state: AppState, source: Arc<dyn CatalogSource>, interval: Duration) -> JoinHandle<()> {
    info!(interval_secs = interval.as_secs(), source = %source.describe(), "catalog refresh configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the initial load already happened.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if let Err(e) = refresh_once(&state, source.as_ref()).await {
                warn!(error = %e, retryable = e.retryable(), "catalog refresh failed; keeping previous snapshot");
            }
        }
    })
}

#[cfg(test)]
#[path = "refresh_test.rs"]
mod tests;
