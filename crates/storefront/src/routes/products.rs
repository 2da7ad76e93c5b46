//! Product route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use gymstore_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::{NewReview, Product};
use crate::state::AppState;
use crate::store::{MAX_RELATED, Store};

/// Default number of search results.
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Upper bound on search results.
const MAX_SEARCH_LIMIT: usize = 50;

/// Product summary for grids and search results.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub display_price: String,
    pub discount_percentage: Option<Decimal>,
    pub rating: f64,
    pub reviews: u32,
    pub in_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            brand: product.brand.clone(),
            image: product.primary_image().map(str::to_owned),
            price: product.price,
            old_price: product.old_price,
            display_price: product.display_price(),
            discount_percentage: product.discount_percentage(),
            rating: product.rating,
            reviews: product.reviews,
            in_stock: product.in_stock,
        }
    }
}

/// Map products to cards.
pub fn cards<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<ProductCard> {
    products.into_iter().map(ProductCard::from).collect()
}

/// Product page data.
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailView {
    pub product: Product,
    pub display_price: String,
    pub related: Vec<ProductCard>,
}

impl ProductDetailView {
    /// Build the detail view for `product`.
    #[must_use]
    pub fn new(store: &Store, product: &Product) -> Self {
        Self {
            product: product.clone(),
            display_price: product.display_price(),
            related: cards(store.related_products(product.id, MAX_RELATED)),
        }
    }
}

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

/// Search the catalog by name, brand or SKU.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<ProductCard>> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
        .min(MAX_SEARCH_LIMIT);
    let store = state.store().read().await;
    Json(cards(store.search(&query.q, limit)))
}

/// Display a single product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<ProductDetailView>> {
    let store = state.store().read().await;
    let product = store.require_product(id)?;
    Ok(Json(ProductDetailView::new(&store, product)))
}

/// Review form; the author is the signed-in user.
#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: u8,
    pub comment: String,
}

/// Add a review to a product.
#[instrument(skip(state, user, form), fields(email = %user.email))]
pub async fn add_review(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<ProductId>,
    Json(form): Json<ReviewForm>,
) -> Result<(StatusCode, Json<Product>)> {
    let review = NewReview {
        author: user.name,
        rating: form.rating,
        comment: form.comment,
    };
    let mut store = state.store().write().await;
    let product = store.add_review(id, review)?.clone();
    Ok((StatusCode::CREATED, Json(product)))
}

/// Back-in-stock subscription form.
#[derive(Debug, Deserialize)]
pub struct StockAlertForm {
    pub email: String,
}

/// Result of a stock alert subscription.
#[derive(Debug, Serialize)]
pub struct StockAlertResponse {
    /// False when this email was already subscribed.
    pub subscribed: bool,
}

/// Ask to be emailed when a product is back in stock.
#[instrument(skip(state, form))]
pub async fn subscribe_stock(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(form): Json<StockAlertForm>,
) -> Result<Json<StockAlertResponse>> {
    let mut store = state.store().write().await;
    let subscribed = store.subscribe_stock(id, &form.email)?;
    if subscribed {
        tracing::info!(product_id = %id, "stock alert registered");
    }
    Ok(Json(StockAlertResponse { subscribed }))
}
