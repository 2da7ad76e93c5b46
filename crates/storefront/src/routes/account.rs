//! Account route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use gymstore_core::OrderNumber;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::{Order, User};
use crate::state::AppState;

/// The signed-in user.
#[instrument(skip(user))]
pub async fn index(RequireUser(user): RequireUser) -> Json<User> {
    Json(user)
}

/// The user's orders, newest first.
#[instrument(skip(state, user), fields(email = %user.email))]
pub async fn orders(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Json<Vec<Order>> {
    let store = state.store().read().await;
    Json(store.orders_for(&user.email).into_iter().cloned().collect())
}

/// Cancel one of the user's orders.
#[instrument(skip(state, user), fields(email = %user.email))]
pub async fn cancel_order(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<OrderNumber>,
) -> Result<Json<Order>> {
    let mut store = state.store().write().await;
    let order = store.cancel_order(&id, &user.email)?.clone();
    Ok(Json(order))
}
