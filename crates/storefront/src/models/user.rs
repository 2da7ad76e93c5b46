//! Signed-in user types.

use gymstore_core::{Email, Role};
use serde::{Deserialize, Serialize};

/// The user attached to a shopper's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    pub email: Email,
    pub role: Role,
}

impl User {
    /// Whether the user may use the back-office.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Login form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    /// Optional display name, used instead of the email local part.
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Registration form.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
