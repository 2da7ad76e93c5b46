//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode};
use gymstore_core::Email;
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::shopper::Shopper;
use crate::state::AppState;

/// The signed-in session.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub user: User,
    /// True when the back-office should be shown instead of the storefront.
    pub in_admin_panel: bool,
}

/// Registration acknowledgement.
#[derive(Debug, Serialize)]
pub struct RegisteredView {
    pub email: Email,
}

/// Sign in.
#[instrument(skip(state, session, request), fields(email = %request.email))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionView>> {
    let user = state.auth().log_in(&request)?;

    // Prevent session fixation
    session.cycle_id().await?;

    let mut shopper = Shopper::load(&session).await?;
    shopper.log_in(user.clone());
    shopper.save(&session).await?;
    set_sentry_user(user.email.as_str());

    Ok(Json(SessionView {
        in_admin_panel: shopper.is_in_admin_panel(),
        user,
    }))
}

/// Validate a registration. The visitor still has to sign in afterwards.
#[instrument(skip(state, request), fields(email = %request.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisteredView>)> {
    let email = state.auth().register(&request)?;
    tracing::info!(email = %email, "registration accepted");
    Ok((StatusCode::CREATED, Json(RegisteredView { email })))
}

/// Sign out, keeping the cart.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<StatusCode> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.log_out();
    shopper.save(&session).await?;
    clear_sentry_user();
    Ok(StatusCode::NO_CONTENT)
}
