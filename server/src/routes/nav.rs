//! Header navigation config for the mega menu.

use axum::extract::State;
use axum::response::Json;
use catalog::menu::NavItem;

use crate::state::AppState;

/// `GET /api/nav`
pub async fn nav(State(state): State<AppState>) -> Json<Vec<NavItem>> {
    Json(state.snapshot().await.nav().to_vec())
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod tests;
