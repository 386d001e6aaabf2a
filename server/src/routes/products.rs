//! Product listing, product detail and variation lookup routes.

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::Json;
use catalog::listing::ListingPage;
use catalog::query::{ListingQuery, QueryError, selection_from_query};

use crate::services::catalog::{ProductDetail, VariationLookup};
use crate::state::AppState;

/// `GET /api/products?<listing query>`: one page of the filtered, sorted listing.
pub async fn list_products(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<ListingPage>, StatusCode> {
    let query = ListingQuery::parse(raw.as_deref().unwrap_or_default()).map_err(query_error_to_status)?;
    let snapshot = state.snapshot().await;
    Ok(Json(snapshot.listing(&query, state.page_size)))
}

/// `GET /api/products/{slug}`: product with its configurable attributes.
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetail>, StatusCode> {
    state
        .snapshot()
        .await
        .product_detail(&slug)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/products/{slug}/variation?<attribute-slug>=<value>...`: resolve a
/// shopper's selection.
pub async fn resolve_variation(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    RawQuery(raw): RawQuery,
) -> Result<Json<VariationLookup>, StatusCode> {
    let selections = selection_from_query(raw.as_deref().unwrap_or_default()).map_err(query_error_to_status)?;
    state
        .snapshot()
        .await
        .resolve_variation(&slug, &selections)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

fn query_error_to_status(err: QueryError) -> StatusCode {
    tracing::debug!(error = %err, "rejecting malformed query string");
    StatusCode::BAD_REQUEST
}

#[cfg(test)]
#[path = "products_test.rs"]
mod tests;
