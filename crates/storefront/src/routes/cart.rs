//! Cart route handlers.
//!
//! The cart lives on the shopper in the session. Every mutation responds with
//! the updated [`CartView`] so the client can redraw the cart sidebar.

use axum::{Json, extract::State};
use gymstore_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use crate::cart::{Cart, CartLine};
use crate::error::{AppError, Result};
use crate::shopper::Shopper;
use crate::state::AppState;

/// Cart line display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub display_price: String,
    pub display_line_total: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            line: line.clone(),
            display_price: Price::vnd(line.product.price).display(),
            display_line_total: line.display_line_total(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    pub subtotal: Decimal,
    pub display_subtotal: String,
    pub item_count: u32,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            subtotal: cart.subtotal(),
            display_subtotal: Price::vnd(cart.subtotal()).display(),
            item_count: cart.line_count(),
        }
    }
}

/// Cart count badge.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub size: Option<String>,
    pub flavor: Option<String>,
}

const fn default_quantity() -> u32 {
    1
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: ProductId,
    /// Zero or less removes the line.
    pub quantity: i64,
    pub size: Option<String>,
    pub flavor: Option<String>,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: ProductId,
    pub size: Option<String>,
    pub flavor: Option<String>,
}

/// Display the cart.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Json<CartView>> {
    let shopper = Shopper::load(&session).await?;
    Ok(Json(CartView::from(shopper.cart())))
}

/// Add a product variant to the cart.
///
/// Rejects zero quantities, out-of-stock products and sizes or flavors the
/// product is not sold in. A missing size or flavor defaults to the
/// product's first option.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Json(form): Json<AddToCartForm>,
) -> Result<Json<CartView>> {
    if form.quantity == 0 {
        return Err(AppError::BadRequest("quantity must be at least 1".to_string()));
    }

    let mut shopper = Shopper::load(&session).await?;
    {
        let store = state.store().read().await;
        let product = store.require_product(form.product_id)?;

        if !product.in_stock {
            return Err(AppError::BadRequest(format!("{} is out of stock", product.name)));
        }
        let size = resolve_option("size", form.size, &product.sizes)?;
        let flavor = resolve_option("flavor", form.flavor, &product.flavors)?;

        shopper
            .cart_mut()
            .add_line(product, form.quantity, size, flavor);
    }
    shopper.save(&session).await?;

    tracing::debug!(items = shopper.cart().line_count(), "cart updated");
    Ok(Json(CartView::from(shopper.cart())))
}

/// A chosen size or flavor must be one the product offers; none chosen
/// means the first offered option.
fn resolve_option(field: &str, chosen: Option<String>, offered: &[String]) -> Result<Option<String>> {
    match chosen {
        Some(value) if !offered.contains(&value) => Err(AppError::BadRequest(format!(
            "{field} {value:?} is not available for this product"
        ))),
        Some(value) => Ok(Some(value)),
        None => Ok(offered.first().cloned()),
    }
}

/// Overwrite a line's quantity.
#[instrument(skip(session))]
pub async fn update(session: Session, Json(form): Json<UpdateCartForm>) -> Result<Json<CartView>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.cart_mut().set_quantity(
        form.product_id,
        form.quantity,
        form.size.as_deref(),
        form.flavor.as_deref(),
    );
    shopper.save(&session).await?;
    Ok(Json(CartView::from(shopper.cart())))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(
    session: Session,
    Json(form): Json<RemoveFromCartForm>,
) -> Result<Json<CartView>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper
        .cart_mut()
        .remove_line(form.product_id, form.size.as_deref(), form.flavor.as_deref());
    shopper.save(&session).await?;
    Ok(Json(CartView::from(shopper.cart())))
}

/// Cart count badge.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<Json<CartCount>> {
    let shopper = Shopper::load(&session).await?;
    Ok(Json(CartCount {
        count: shopper.cart().line_count(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_option() {
        let sizes = vec!["5Lbs".to_string(), "10Lbs".to_string()];
        assert_eq!(
            resolve_option("size", None, &sizes).ok(),
            Some(Some("5Lbs".to_string()))
        );
        assert_eq!(
            resolve_option("size", Some("10Lbs".to_string()), &sizes).ok(),
            Some(Some("10Lbs".to_string()))
        );
        assert!(resolve_option("size", Some("2Lbs".to_string()), &sizes).is_err());
        assert!(resolve_option("flavor", Some("Vanilla".to_string()), &[]).is_err());
        assert_eq!(resolve_option("flavor", None, &[]).ok(), Some(None));
    }
}
