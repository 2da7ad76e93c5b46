//! Product management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gymstore_core::ProductId;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Product, ProductDraft};
use crate::state::AppState;
use crate::store::StockSubscription;

/// Every product, newest first.
#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().read().await.products().to_vec())
}

/// Create a product.
#[instrument(skip(_admin, state))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>)> {
    let mut store = state.store().write().await;
    let product = store.add_product(&draft)?.clone();
    Ok((StatusCode::CREATED, Json(product)))
}

/// Edit a product.
#[instrument(skip(_admin, state))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>> {
    let mut store = state.store().write().await;
    Ok(Json(store.update_product(id, &draft)?.clone()))
}

/// Delete a product.
#[instrument(skip(_admin, state))]
pub async fn destroy(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<StatusCode> {
    state.store().write().await.delete_product(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Feature or unfeature a product on the home page.
#[instrument(skip(_admin, state))]
pub async fn toggle_featured(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    let mut store = state.store().write().await;
    Ok(Json(store.toggle_featured(id)?.clone()))
}

/// Pending back-in-stock requests.
#[instrument(skip_all)]
pub async fn stock_alerts(
    _admin: RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<StockSubscription>> {
    Json(state.store().read().await.stock_subscriptions().to_vec())
}
