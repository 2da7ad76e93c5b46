//! Shopping cart.
//!
//! A cart line is identified by `(product id, size, flavor)`: the same
//! product in two sizes occupies two lines, and adding an existing variant
//! bumps its quantity instead of appending a duplicate.

use gymstore_core::{Price, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Product data captured when the line was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub old_price: Option<Decimal>,
    pub brand: String,
}

impl From<&Product> for CartProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            image: product.primary_image().map(str::to_owned),
            price: product.price,
            old_price: product.old_price,
            brand: product.brand.clone(),
        }
    }
}

/// One row of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: CartProduct,
    /// Always at least 1.
    pub quantity: u32,
    pub size: Option<String>,
    pub flavor: Option<String>,
}

impl CartLine {
    /// Whether this line has the given identity key.
    #[must_use]
    pub fn is_variant(&self, product_id: ProductId, size: Option<&str>, flavor: Option<&str>) -> bool {
        self.product.id == product_id
            && self.size.as_deref() == size
            && self.flavor.as_deref() == flavor
    }

    /// `price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    /// Display line total in the store currency.
    #[must_use]
    pub fn display_line_total(&self) -> String {
        Price::vnd(self.line_total()).display()
    }
}

/// The shopper's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add `quantity` of a product variant.
    ///
    /// Merges into the existing line with the same identity key, otherwise
    /// appends a new line. A zero quantity is ignored.
    pub fn add_line(
        &mut self,
        product: &Product,
        quantity: u32,
        size: Option<String>,
        flavor: Option<String>,
    ) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.find_mut(product.id, size.as_deref(), flavor.as_deref()) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            product: CartProduct::from(product),
            quantity,
            size,
            flavor,
        });
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    ///
    /// Unknown variants are left alone.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        size: Option<&str>,
        flavor: Option<&str>,
    ) {
        if quantity <= 0 {
            self.remove_line(product_id, size, flavor);
            return;
        }

        if let Some(line) = self.find_mut(product_id, size, flavor) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Remove a line. No-op if absent.
    pub fn remove_line(&mut self, product_id: ProductId, size: Option<&str>, flavor: Option<&str>) {
        self.lines
            .retain(|line| !line.is_variant(product_id, size, flavor));
    }

    /// Total number of items, for the cart badge.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, line| total.saturating_add(line.quantity))
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by identity key.
    #[must_use]
    pub fn find(&self, product_id: ProductId, size: Option<&str>, flavor: Option<&str>) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|line| line.is_variant(product_id, size, flavor))
    }

    fn find_mut(
        &mut self,
        product_id: ProductId,
        size: Option<&str>,
        flavor: Option<&str>,
    ) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.is_variant(product_id, size, flavor))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::seed;

    fn product(id: i32) -> Product {
        seed::products()
            .into_iter()
            .find(|p| p.id == ProductId::new(id))
            .unwrap()
    }

    fn size(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_same_variant_merges() {
        let mut cart = Cart::new();
        let whey = product(1);
        cart.add_line(&whey, 1, size("5Lbs"), None);
        cart.add_line(&whey, 1, size("5Lbs"), None);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines().first().unwrap().quantity, 2);
    }

    #[test]
    fn test_different_size_is_a_new_line() {
        let mut cart = Cart::new();
        let whey = product(1);
        cart.add_line(&whey, 1, size("5Lbs"), None);
        cart.add_line(&whey, 1, size("10Lbs"), None);

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_flavor_is_part_of_identity() {
        let mut cart = Cart::new();
        let whey = product(1);
        cart.add_line(&whey, 1, size("5Lbs"), Some("Vanilla Ice Cream".to_string()));
        cart.add_line(&whey, 1, size("5Lbs"), Some("Double Rich Chocolate".to_string()));
        cart.add_line(&whey, 1, size("5Lbs"), None);
        assert_eq!(cart.lines().len(), 3);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_line(&product(1), 1, size("5Lbs"), None);
        cart.add_line(&product(7), 3, None, Some("Icy Blue Razz".to_string()));

        cart.set_quantity(ProductId::new(1), 0, Some("5Lbs"), None);
        assert!(cart.find(ProductId::new(1), Some("5Lbs"), None).is_none());
        assert_eq!(cart.line_count(), 3);
    }

    #[test]
    fn test_set_quantity_overwrites() {
        let mut cart = Cart::new();
        cart.add_line(&product(1), 1, size("5Lbs"), None);
        cart.set_quantity(ProductId::new(1), 4, Some("5Lbs"), None);
        assert_eq!(cart.line_count(), 4);

        cart.set_quantity(ProductId::new(1), -2, Some("5Lbs"), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_unknown_variant_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&product(1), 1, size("5Lbs"), None);
        cart.set_quantity(ProductId::new(1), 9, Some("10Lbs"), None);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_line(&product(2), 2, size("5Lbs"), None);
        cart.remove_line(ProductId::new(3), None, None);
        assert_eq!(cart.line_count(), 2);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_line(&product(1), 2, size("5Lbs"), None);
        cart.add_line(&product(9), 1, None, None);
        assert_eq!(
            cart.subtotal(),
            Decimal::from(1_850_000 * 2) + Decimal::from(450_000)
        );
    }

    #[test]
    fn test_add_then_remove_restores_subtotal() {
        let mut cart = Cart::new();
        cart.add_line(&product(5), 1, None, Some("Chocolate".to_string()));
        let before = cart.subtotal();

        cart.add_line(&product(7), 2, None, Some("Fruit Punch".to_string()));
        assert!(cart.subtotal() > before);

        cart.remove_line(ProductId::new(7), None, Some("Fruit Punch"));
        assert_eq!(cart.subtotal(), before);
    }

    #[test]
    fn test_zero_quantity_add_is_ignored() {
        let mut cart = Cart::new();
        cart.add_line(&product(1), 0, None, None);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_snapshot_keeps_price_at_add_time() {
        let mut whey = product(1);
        let mut cart = Cart::new();
        cart.add_line(&whey, 1, size("5Lbs"), None);

        whey.price = Decimal::from(1);
        cart.add_line(&whey, 1, size("5Lbs"), None);
        assert_eq!(cart.subtotal(), Decimal::from(1_850_000 * 2));
    }
}
