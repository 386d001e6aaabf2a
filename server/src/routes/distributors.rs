//! Where-to-buy directory search.

use axum::extract::{Query, State};
use axum::response::Json;
use catalog::distributor::{DistributorQuery, Region};
use serde::Deserialize;

use crate::services::catalog::DistributorDirectory;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DistributorParams {
    /// `usa`, `europe`, `international` or `all`. Unknown values mean all.
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl From<DistributorParams> for DistributorQuery {
    fn from(params: DistributorParams) -> Self {
        Self {
            region: params.region.as_deref().and_then(Region::parse),
            search: params.q.unwrap_or_default(),
        }
    }
}

/// `GET /api/distributors?region=<region>&q=<text>`
pub async fn list_distributors(
    State(state): State<AppState>,
    Query(params): Query<DistributorParams>,
) -> Json<DistributorDirectory> {
    Json(state.snapshot().await.distributors(&params.into()))
}

#[cfg(test)]
#[path = "distributors_test.rs"]
mod tests;
