//! Authentication extractors.
//!
//! Handlers that need a signed-in user take [`RequireUser`]; back-office
//! handlers take [`RequireAdmin`]. Both read the shopper stored in the session.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::AppError;
use crate::models::User;
use crate::shopper::Shopper;

/// Extractor that requires a signed-in user.
///
/// Rejects with `401 Unauthorized` so the client can open the login dialog.
///
/// # Example
///
/// ```rust,ignore
/// async fn account(RequireUser(user): RequireUser) -> Json<User> {
///     Json(user)
/// }
/// ```
pub struct RequireUser(pub User);

/// Extractor that requires a signed-in admin.
///
/// Rejects with `401 Unauthorized` for visitors and `403 Forbidden` for
/// customers.
pub struct RequireAdmin(pub User);

async fn current_user(parts: &Parts) -> Result<Option<User>, AppError> {
    // Set by SessionManagerLayer
    let session = parts
        .extensions
        .get::<Session>()
        .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

    let shopper = Shopper::load(session).await?;
    Ok(shopper.user().cloned())
}

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        current_user(parts)
            .await?
            .map(Self)
            .ok_or_else(|| AppError::Unauthorized("sign in required".to_string()))
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = current_user(parts)
            .await?
            .ok_or_else(|| AppError::Unauthorized("sign in required".to_string()))?;

        if !user.is_admin() {
            tracing::warn!(email = %user.email, path = %parts.uri.path(), "non-admin on admin route");
            return Err(AppError::Forbidden("admin access required".to_string()));
        }
        Ok(Self(user))
    }
}
