//! In-memory catalog and order book shared by every visitor.
//!
//! The [`Store`] owns the product, brand and article collections plus the
//! placed orders. It starts from the seed data and lives for the lifetime
//! of the process; handlers reach it through
//! [`AppState::store`](crate::state::AppState::store).

use gymstore_core::{
    ArticleId, BrandId, Email, OrderNumber, OrderStatus, ProductId, ReviewId,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::Cart;
use crate::models::{
    Article, ArticleDraft, Brand, BrandDraft, CheckoutForm, NewReview, Order, OrderError,
    Product, ProductDraft, ValidationError, today,
};
use crate::navigation::ListingFilter;
use crate::seed;

/// Related products shown under a product page.
pub const MAX_RELATED: usize = 4;

/// Random order numbers tried before giving up.
const ORDER_NUMBER_ATTEMPTS: usize = 64;

/// Catalog lookup and validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("brand {0} not found")]
    BrandNotFound(BrandId),

    #[error("article {0} not found")]
    ArticleNotFound(ArticleId),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Ordering for category and brand listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingSort {
    /// Catalog order.
    #[default]
    Default,
    /// Best sellers first.
    Popularity,
    PriceAsc,
    PriceDesc,
}

/// A request to be told when a product is back in stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSubscription {
    pub product_id: ProductId,
    pub email: Email,
}

/// Shared storefront data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    products: Vec<Product>,
    brands: Vec<Brand>,
    articles: Vec<Article>,
    orders: Vec<Order>,
    stock_subscriptions: Vec<StockSubscription>,
}

impl Store {
    /// A store holding the launch catalog and sample orders.
    #[must_use]
    pub fn seeded() -> Self {
        let products = seed::products();
        let orders = seed::orders(&products);
        Self {
            products,
            brands: seed::brands(),
            articles: seed::articles(),
            orders,
            stock_subscriptions: Vec::new(),
        }
    }

    // =========================================================================
    // Products
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product, failing with [`StoreError::ProductNotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if no product has this id.
    pub fn require_product(&self, id: ProductId) -> Result<&Product, StoreError> {
        self.product(id).ok_or(StoreError::ProductNotFound(id))
    }

    fn product_mut(&mut self, id: ProductId) -> Result<&mut Product, StoreError> {
        self.products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))
    }

    /// Validate a draft and insert it at the front of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the draft fails validation.
    pub fn add_product(&mut self, draft: &ProductDraft) -> Result<&Product, StoreError> {
        let fields = draft.validate()?;
        let id = self
            .products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId::new(1), |id| id.next());

        self.products.insert(0, Product::from_fields(id, fields));
        tracing::info!(product_id = %id, "product added");
        self.require_product(id)
    }

    /// Replace a product's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the draft fails
    /// validation.
    pub fn update_product(
        &mut self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<&Product, StoreError> {
        let fields = draft.validate()?;
        let product = self.product_mut(id)?;
        product.apply(fields);
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    /// Remove a product from the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist.
    pub fn delete_product(&mut self, id: ProductId) -> Result<Product, StoreError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        self.stock_subscriptions.retain(|s| s.product_id != id);
        tracing::info!(product_id = %id, "product deleted");
        Ok(self.products.remove(index))
    }

    /// Flip the featured flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist.
    pub fn toggle_featured(&mut self, id: ProductId) -> Result<&Product, StoreError> {
        let product = self.product_mut(id)?;
        product.is_featured = !product.is_featured;
        Ok(product)
    }

    #[must_use]
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured).collect()
    }

    /// The `limit` best-selling products, ties kept in catalog order.
    #[must_use]
    pub fn best_sellers(&self, limit: usize) -> Vec<&Product> {
        let mut products: Vec<_> = self.products.iter().collect();
        products.sort_by(|a, b| b.sold.cmp(&a.sold));
        products.truncate(limit);
        products
    }

    #[must_use]
    pub fn products_in_category(&self, category: &str, limit: usize) -> Vec<&Product> {
        let filter = ListingFilter::category(category);
        self.products
            .iter()
            .filter(|p| p.matches_filter(&filter))
            .take(limit)
            .collect()
    }

    /// Other products in the same category, at most [`MAX_RELATED`].
    #[must_use]
    pub fn related_products(&self, id: ProductId, limit: usize) -> Vec<&Product> {
        let Some(product) = self.product(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.id != id && p.category == product.category)
            .take(limit.min(MAX_RELATED))
            .collect()
    }

    /// Products for a category or brand listing.
    #[must_use]
    pub fn listing(&self, filter: &ListingFilter, sort: ListingSort) -> Vec<&Product> {
        let mut products: Vec<_> = self
            .products
            .iter()
            .filter(|p| p.matches_filter(filter))
            .collect();

        match sort {
            ListingSort::Default => {}
            ListingSort::Popularity => products.sort_by(|a, b| b.sold.cmp(&a.sold)),
            ListingSort::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            ListingSort::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        }
        products
    }

    /// Case-insensitive search over name, brand and SKU.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.matches_query(query))
            .take(limit)
            .collect()
    }

    /// Add a review dated today.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the review fails
    /// validation.
    pub fn add_review(
        &mut self,
        product_id: ProductId,
        review: NewReview,
    ) -> Result<&Product, StoreError> {
        let product = self.product_mut(product_id)?;
        let id = product
            .product_reviews
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(ReviewId::new(1), |id| id.next());

        product.add_review(review.into_review(id, today())?);
        tracing::info!(product_id = %product_id, rating = product.rating, "review added");
        Ok(product)
    }

    /// Register interest in a restock. Subscribing twice is a no-op.
    ///
    /// Returns whether a new subscription was recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the email is
    /// malformed.
    pub fn subscribe_stock(&mut self, product_id: ProductId, email: &str) -> Result<bool, StoreError> {
        self.require_product(product_id)?;
        let email = Email::parse(email).map_err(ValidationError::from)?;

        let exists = self
            .stock_subscriptions
            .iter()
            .any(|s| s.product_id == product_id && s.email.matches(&email));
        if exists {
            return Ok(false);
        }

        self.stock_subscriptions.push(StockSubscription { product_id, email });
        Ok(true)
    }

    #[must_use]
    pub fn stock_subscriptions(&self) -> &[StockSubscription] {
        &self.stock_subscriptions
    }

    // =========================================================================
    // Brands
    // =========================================================================

    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    #[must_use]
    pub fn featured_brands(&self) -> Vec<&Brand> {
        self.brands.iter().filter(|b| b.is_featured).collect()
    }

    fn brand_mut(&mut self, id: BrandId) -> Result<&mut Brand, StoreError> {
        self.brands
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::BrandNotFound(id))
    }

    /// Validate and append a brand.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the draft fails validation.
    pub fn add_brand(&mut self, draft: BrandDraft) -> Result<&Brand, StoreError> {
        let id = self
            .brands
            .iter()
            .map(|b| b.id)
            .max()
            .map_or(BrandId::new(1), |id| id.next());
        let brand = draft.into_brand(id)?;
        tracing::info!(brand_id = %id, name = %brand.name, "brand added");
        self.brands.push(brand);
        self.brand_mut(id).map(|b| &*b)
    }

    /// Replace a brand's name, logo and featured flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the brand does not exist or the draft fails
    /// validation.
    pub fn update_brand(&mut self, id: BrandId, draft: BrandDraft) -> Result<&Brand, StoreError> {
        let updated = draft.into_brand(id)?;
        let brand = self.brand_mut(id)?;
        *brand = updated;
        Ok(brand)
    }

    /// Remove a brand. Products keep their brand name.
    ///
    /// # Errors
    ///
    /// Returns an error if the brand does not exist.
    pub fn delete_brand(&mut self, id: BrandId) -> Result<Brand, StoreError> {
        let index = self
            .brands
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::BrandNotFound(id))?;
        tracing::info!(brand_id = %id, "brand deleted");
        Ok(self.brands.remove(index))
    }

    /// Flip a brand's featured flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the brand does not exist.
    pub fn toggle_brand_featured(&mut self, id: BrandId) -> Result<&Brand, StoreError> {
        let brand = self.brand_mut(id)?;
        brand.is_featured = !brand.is_featured;
        Ok(brand)
    }

    // =========================================================================
    // Articles
    // =========================================================================

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn articles_in_category(&self, category: &str) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    fn article_mut(&mut self, id: ArticleId) -> Result<&mut Article, StoreError> {
        self.articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(StoreError::ArticleNotFound(id))
    }

    /// Validate and publish an article dated today, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the draft fails validation.
    pub fn add_article(&mut self, draft: &ArticleDraft) -> Result<&Article, StoreError> {
        let fields = draft.validate()?;
        let id = self
            .articles
            .iter()
            .map(|a| a.id)
            .max()
            .map_or(ArticleId::new(1), |id| id.next());

        self.articles.insert(0, Article::from_fields(id, today(), fields));
        tracing::info!(article_id = %id, "article added");
        self.article_mut(id).map(|a| &*a)
    }

    /// Replace an article's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the article does not exist or the draft fails
    /// validation.
    pub fn update_article(
        &mut self,
        id: ArticleId,
        draft: &ArticleDraft,
    ) -> Result<&Article, StoreError> {
        let fields = draft.validate()?;
        let article = self.article_mut(id)?;
        article.apply(fields);
        Ok(article)
    }

    /// Remove an article.
    ///
    /// # Errors
    ///
    /// Returns an error if the article does not exist.
    pub fn delete_article(&mut self, id: ArticleId) -> Result<Article, StoreError> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or(StoreError::ArticleNotFound(id))?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(self.articles.remove(index))
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Every order, newest first.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Orders placed with `email`, newest first.
    #[must_use]
    pub fn orders_for(&self, email: &Email) -> Vec<&Order> {
        self.orders.iter().filter(|o| o.belongs_to(email)).collect()
    }

    fn order_mut(&mut self, id: &OrderNumber) -> Result<&mut Order, OrderError> {
        self.orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))
    }

    /// Turn the cart into an order.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] for an empty cart,
    /// [`OrderError::Invalid`] for incomplete shipping details and
    /// [`OrderError::NumbersExhausted`] when no free order number turns up.
    pub fn place_order(&mut self, form: &CheckoutForm, cart: &Cart) -> Result<&Order, OrderError> {
        self.place_order_with(form, cart, &mut rand::rng())
    }

    fn place_order_with(
        &mut self,
        form: &CheckoutForm,
        cart: &Cart,
        rng: &mut impl Rng,
    ) -> Result<&Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let customer = form.customer()?;

        let id = (0..ORDER_NUMBER_ATTEMPTS)
            .map(|_| OrderNumber::from_digits(rng.random_range(OrderNumber::MIN..=OrderNumber::MAX)))
            .find(|candidate| !self.orders.iter().any(|o| &o.id == candidate))
            .ok_or_else(|| {
                tracing::error!(orders = self.orders.len(), "order numbers exhausted");
                OrderError::NumbersExhausted
            })?;

        let order = Order {
            id: id.clone(),
            date: today(),
            status: OrderStatus::Processing,
            total: cart.subtotal(),
            items: cart.lines().to_vec(),
            customer,
            payment_status: form.payment_method.initial_status(),
            payment_method: form.payment_method,
        };
        tracing::info!(order_id = %id, total = %order.total, "order placed");
        self.orders.insert(0, order);
        self.order_mut(&id).map(|o| &*o)
    }

    /// Move an order to a new status from the back-office.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] if no order has this number.
    pub fn update_order_status(
        &mut self,
        id: &OrderNumber,
        status: OrderStatus,
    ) -> Result<&Order, OrderError> {
        let order = self.order_mut(id)?;
        order.status = status;
        tracing::info!(order_id = %id, status = status.label(), "order status changed");
        Ok(order)
    }

    /// Cancel an order on its owner's behalf.
    ///
    /// Orders belonging to someone else are reported as not found.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::NotFound`] for unknown or foreign orders and
    /// [`OrderError::NotCancellable`] once processing has finished.
    pub fn cancel_order(&mut self, id: &OrderNumber, email: &Email) -> Result<&Order, OrderError> {
        let order = self.order_mut(id)?;
        if !order.belongs_to(email) {
            return Err(OrderError::NotFound(id.clone()));
        }
        order.cancel()?;
        tracing::info!(order_id = %id, "order cancelled by customer");
        Ok(order)
    }
}
