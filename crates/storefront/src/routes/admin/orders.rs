//! Order management.

use axum::{
    Json,
    extract::{Path, State},
};
use gymstore_core::{OrderNumber, OrderStatus};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::models::Order;
use crate::state::AppState;

/// Status change form.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: OrderStatus,
}

/// Every order, newest first.
#[instrument(skip_all)]
pub async fn index(_admin: RequireAdmin, State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(state.store().read().await.orders().to_vec())
}

/// Move an order through fulfilment.
#[instrument(skip(_admin, state))]
pub async fn update_status(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<OrderNumber>,
    Json(form): Json<StatusForm>,
) -> Result<Json<Order>> {
    let mut store = state.store().write().await;
    Ok(Json(store.update_order_status(&id, form.status)?.clone()))
}
