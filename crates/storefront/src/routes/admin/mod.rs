//! Admin back-office routes.
//!
//! Every handler takes [`RequireAdmin`](crate::middleware::RequireAdmin), so
//! visitors get `401` and customers `403`.

pub mod articles;
pub mod brands;
pub mod orders;
pub mod products;

use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde::Serialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::shopper::Shopper;
use crate::state::AppState;

/// Which side of the site an admin is on.
#[derive(Debug, Serialize)]
pub struct PanelView {
    pub in_admin_panel: bool,
}

/// Leave the back-office and browse the storefront from the home page.
#[instrument(skip_all, fields(email = %admin.email))]
pub async fn view_site(RequireAdmin(admin): RequireAdmin, session: Session) -> Result<Json<PanelView>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.view_site_as_admin();
    shopper.save(&session).await?;
    Ok(Json(PanelView {
        in_admin_panel: shopper.is_in_admin_panel(),
    }))
}

/// Return to the back-office.
#[instrument(skip_all, fields(email = %admin.email))]
pub async fn return_to_panel(
    RequireAdmin(admin): RequireAdmin,
    session: Session,
) -> Result<Json<PanelView>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.return_to_admin_panel();
    shopper.save(&session).await?;
    Ok(Json(PanelView {
        in_admin_panel: shopper.is_in_admin_panel(),
    }))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/view-site", post(view_site))
        .route("/return", post(return_to_panel))
        .route("/products", get(products::index).post(products::create))
        .route(
            "/products/{id}",
            put(products::update).delete(products::destroy),
        )
        .route("/products/{id}/featured", post(products::toggle_featured))
        .route("/brands", get(brands::index).post(brands::create))
        .route("/brands/{id}", put(brands::update).delete(brands::destroy))
        .route("/brands/{id}/featured", post(brands::toggle_featured))
        .route("/articles", get(articles::index).post(articles::create))
        .route(
            "/articles/{id}",
            put(articles::update).delete(articles::destroy),
        )
        .route("/orders", get(orders::index))
        .route("/orders/{id}/status", post(orders::update_status))
        .route("/stock-alerts", get(products::stock_alerts))
}
