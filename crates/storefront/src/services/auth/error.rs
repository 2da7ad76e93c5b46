//! Authentication error types.

use thiserror::Error;

/// Errors that can occur signing in or registering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A required form field was blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] gymstore_core::EmailError),

    /// Password and confirmation differ.
    #[error("password confirmation does not match")]
    PasswordMismatch,
}
