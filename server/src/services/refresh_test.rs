use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use catalog::product::Catalog;

use super::*;
use crate::state::test_helpers::{empty_app_state, sample_catalog, test_app_state};

/// Hands out queued results in order, then keeps failing.
struct ScriptedSource {
    results: Mutex<Vec<Result<Catalog, SourceError>>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(mut results: Vec<Result<Catalog, SourceError>>) -> Self {
        results.reverse();
        Self { results: Mutex::new(results), calls: AtomicUsize::new(0) }
    }
}

#[async_trait::async_trait]
impl CatalogSource for ScriptedSource {
    async fn load(&self) -> Result<Catalog, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(SourceError::Request("script exhausted".into())))
    }

    fn describe(&self) -> String {
        "scripted".into()
    }
}

#[tokio::test]
async fn refresh_once_swaps_in_new_snapshot() {
    let state = empty_app_state();
    let source = ScriptedSource::new(vec![Ok(sample_catalog())]);

    let products = refresh_once(&state, &source).await.unwrap();

    assert_eq!(products, 20);
    assert_eq!(state.snapshot().await.product_count(), 20);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_snapshot() {
    let state = test_app_state();
    let source = ScriptedSource::new(vec![Err(SourceError::Status { status: 502 })]);

    let err = refresh_once(&state, &source).await.unwrap_err();

    assert!(err.retryable());
    assert_eq!(state.snapshot().await.product_count(), 20);
}

#[tokio::test(start_paused = true)]
async fn refresh_task_reloads_on_interval() {
    let state = empty_app_state();
    let source = Arc::new(ScriptedSource::new(vec![Ok(sample_catalog())]));

    let handle = spawn_refresh_task(state.clone(), source.clone(), Duration::from_secs(60));

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_secs(31)).await;
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(state.snapshot().await.product_count(), 20);

    handle.abort();
}
