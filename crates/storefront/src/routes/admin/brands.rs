//! Brand management.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use gymstore_core::BrandId;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::{Brand, BrandDraft};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Brand>> {
    Json(state.store().read().await.brands().to_vec())
}

#[instrument(skip(_admin, state))]
pub async fn create(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Json(draft): Json<BrandDraft>,
) -> Result<(StatusCode, Json<Brand>)> {
    let mut store = state.store().write().await;
    let brand = store.add_brand(draft)?.clone();
    Ok((StatusCode::CREATED, Json(brand)))
}

#[instrument(skip(_admin, state))]
pub async fn update(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<BrandId>,
    Json(draft): Json<BrandDraft>,
) -> Result<Json<Brand>> {
    let mut store = state.store().write().await;
    Ok(Json(store.update_brand(id, draft)?.clone()))
}

#[instrument(skip(_admin, state))]
pub async fn destroy(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<BrandId>,
) -> Result<StatusCode> {
    state.store().write().await.delete_brand(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(_admin, state))]
pub async fn toggle_featured(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<BrandId>,
) -> Result<Json<Brand>> {
    let mut store = state.store().write().await;
    Ok(Json(store.toggle_brand_featured(id)?.clone()))
}
