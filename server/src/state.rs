//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the current [`CatalogIndex`] behind an `Arc` so handlers take a
//! cheap snapshot under a short read lock and then work lock-free. The
//! refresh task replaces the whole `Arc` when a new snapshot loads.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::catalog::CatalogIndex;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<RwLock<Arc<CatalogIndex>>>,
    /// Products per listing page.
    pub page_size: usize,
}

impl AppState {
    #[must_use]
    pub fn new(index: CatalogIndex, page_size: usize) -> Self {
        Self { catalog: Arc::new(RwLock::new(Arc::new(index))), page_size: page_size.max(1) }
    }

    /// The index current at the time of the call.
    pub async fn snapshot(&self) -> Arc<CatalogIndex> {
        Arc::clone(&*self.catalog.read().await)
    }

    /// Swap in a freshly built index. In-flight requests keep the old one.
    pub async fn replace(&self, index: CatalogIndex) {
        *self.catalog.write().await = Arc::new(index);
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
