//! Form validation shared by the admin drafts and checkout.
//!
//! Validation is advisory: failures are returned to the caller as a
//! [`ValidationError`] naming the offending field and never cross the
//! store boundary.

use gymstore_core::EmailError;
use thiserror::Error;
use url::Url;

/// A rejected form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A URL field could not be parsed as an absolute URL.
    #[error("{field} is not a valid URL: {value}")]
    InvalidUrl { field: &'static str, value: String },

    /// A numeric field fell outside its allowed range.
    #[error("{field} {expected}")]
    OutOfRange {
        field: &'static str,
        expected: &'static str,
    },

    /// An email field failed to parse.
    #[error("invalid email: {0}")]
    Email(#[from] EmailError),
}

/// Trim `value` and reject it if nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(value.to_owned())
}

/// Trim an optional value, mapping blank to `None`.
pub(crate) fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Require a well-formed absolute URL.
pub(crate) fn required_url(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = required(field, value)?;
    Url::parse(&value).map_err(|_| ValidationError::InvalidUrl {
        field,
        value: value.clone(),
    })?;
    Ok(value)
}

/// Trim a list, dropping blank entries.
pub(crate) fn non_blank(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .collect()
}
