//! Visitor preference handlers.

use axum::Json;
use gymstore_core::Theme;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::shopper::Shopper;

/// Theme choice.
#[derive(Debug, Deserialize, Serialize)]
pub struct ThemePreference {
    pub theme: Theme,
}

/// Switch the storefront colour theme.
#[instrument(skip(session))]
pub async fn set_theme(
    session: Session,
    Json(preference): Json<ThemePreference>,
) -> Result<Json<ThemePreference>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.set_theme(preference.theme);
    shopper.save(&session).await?;
    Ok(Json(ThemePreference {
        theme: shopper.theme(),
    }))
}
