//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Render the active page
//! GET  /health                 - Health check
//!
//! # Navigation
//! POST /navigate               - Push a page onto the history
//! POST /navigate/back          - Pop the history
//! POST /navigate/home          - Return to the nearest home entry
//!
//! # Products
//! GET  /products?q=&limit=     - Search
//! GET  /products/{id}          - Product detail
//! POST /products/{id}/reviews  - Add a review (requires auth)
//! POST /products/{id}/stock-alerts - Back-in-stock subscription
//!
//! # Cart
//! GET  /cart                   - Cart contents
//! POST /cart/add               - Add a variant
//! POST /cart/update            - Overwrite a quantity
//! POST /cart/remove            - Remove a line
//! GET  /cart/count             - Cart count badge
//!
//! # Checkout
//! POST /checkout               - Place an order (requires auth)
//!
//! # Auth
//! POST /auth/login             - Login action
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Account (requires auth)
//! GET  /account                - Current user
//! GET  /account/orders         - Order history
//! POST /account/orders/{id}/cancel - Cancel an order
//!
//! # Preferences
//! POST /preferences/theme      - Set the colour theme
//!
//! # Admin (requires admin role)
//! POST /admin/view-site, /admin/return
//! GET|POST /admin/products, PUT|DELETE /admin/products/{id}, POST /admin/products/{id}/featured
//! GET|POST /admin/brands,   PUT|DELETE /admin/brands/{id},   POST /admin/brands/{id}/featured
//! GET|POST /admin/articles, PUT|DELETE /admin/articles/{id}
//! GET  /admin/orders, POST /admin/orders/{id}/status
//! GET  /admin/stock-alerts
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod pages;
pub mod preferences;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the navigation routes router.
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(pages::navigate))
        .route("/back", post(pages::back))
        .route("/home", post(pages::home))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::search))
        .route("/{id}", get(products::show))
        .route("/{id}/reviews", post(products::add_review))
        .route("/{id}/stock-alerts", post(products::subscribe_stock))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the account routes router.
pub fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(account::index))
        .route("/orders", get(account::orders))
        .route("/orders/{id}/cancel", post(account::cancel_order))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Active page
        .route("/", get(pages::show))
        .nest("/navigate", navigation_routes())
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::place_order))
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .route("/preferences/theme", post(preferences::set_theme))
        .nest("/admin", admin::admin_routes())
}
