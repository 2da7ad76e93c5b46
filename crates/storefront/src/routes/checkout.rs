//! Checkout route handler.

use axum::{Json, extract::State, http::StatusCode};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::{CheckoutForm, Order};
use crate::shopper::Shopper;
use crate::state::AppState;

/// Place an order for the cart contents.
///
/// Requires a signed-in user. On success the cart is emptied and the
/// shopper is sent back to the home page.
#[instrument(skip(state, session, form), fields(payment_method = ?form.payment_method))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<CheckoutForm>,
) -> Result<(StatusCode, Json<Order>)> {
    let mut shopper = Shopper::load(&session).await?;
    if shopper.user().is_none() {
        return Err(AppError::Unauthorized("sign in to check out".to_string()));
    }

    let order = {
        let mut store = state.store().write().await;
        store.place_order(&form, shopper.cart())?.clone()
    };

    shopper.order_placed();
    shopper.save(&session).await?;

    Ok((StatusCode::CREATED, Json(order)))
}
