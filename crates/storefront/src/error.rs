//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::models::{OrderError, ValidationError};
use crate::services::auth::AuthError;
use crate::shopper::NavigationError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog lookup or validation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Order placement or update failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Form validation failed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Navigation was refused.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Session store failed.
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl AppError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Session(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(err) => match err {
                StoreError::ProductNotFound(_)
                | StoreError::BrandNotFound(_)
                | StoreError::ArticleNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::Order(err) => match err {
                OrderError::NotFound(_) => StatusCode::NOT_FOUND,
                OrderError::NotCancellable { .. } => StatusCode::CONFLICT,
                OrderError::EmptyCart => StatusCode::BAD_REQUEST,
                OrderError::NumbersExhausted => StatusCode::SERVICE_UNAVAILABLE,
                OrderError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Auth(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Navigation(_) | Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Session(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Store(err) => err.to_string(),
            Self::Order(err) => err.to_string(),
            Self::Validation(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Navigation(err) => err.to_string(),
            Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context from the signed-in email.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) {
    sentry::add_breadcrumb(breadcrumb(category, message, data));
}

fn breadcrumb(category: &str, message: &str, data: &[(&str, &str)]) -> sentry::Breadcrumb {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    for (key, value) in data {
        breadcrumb.data.insert(
            (*key).to_string(),
            serde_json::Value::String((*value).to_string()),
        );
    }

    breadcrumb
}

#[cfg(test)]
mod tests {
    use gymstore_core::{OrderNumber, OrderStatus, ProductId};

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Unauthorized("sign in required".to_string());
        assert_eq!(err.to_string(), "Unauthorized: sign in required");

        let err = AppError::from(StoreError::ProductNotFound(ProductId::new(42)));
        assert_eq!(err.to_string(), "Store error: product 42 not found");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(StoreError::ProductNotFound(ProductId::new(1)).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ValidationError::Required { field: "name" }.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(NavigationError::LoginRequired { page: "checkout" }.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Forbidden("admins only".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(OrderError::EmptyCart.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(
                OrderError::NotCancellable {
                    id: OrderNumber::from_digits(12345),
                    status: OrderStatus::Completed,
                }
                .into()
            ),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(OrderError::NumbersExhausted.into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            get_status(AuthError::PasswordMismatch.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_breadcrumb_carries_data() {
        let crumb = breadcrumb("navigation", "product-detail", &[("depth", "3")]);
        assert_eq!(crumb.category.as_deref(), Some("navigation"));
        assert_eq!(crumb.message.as_deref(), Some("product-detail"));
        assert_eq!(
            crumb.data.get("depth"),
            Some(&serde_json::Value::String("3".to_string()))
        );
    }
}
