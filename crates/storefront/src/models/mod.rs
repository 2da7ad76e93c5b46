//! Domain models for the storefront.
//!
//! Entities held by the [`Store`](crate::store::Store) and the forms that
//! create or edit them. Form types validate into entity fields; validation
//! failures surface as [`ValidationError`].

pub mod article;
pub mod brand;
pub mod order;
pub mod product;
pub mod session;
pub mod user;
pub mod validation;

pub use article::{Article, ArticleDraft, ArticleFields};
pub use brand::{Brand, BrandDraft};
pub use order::{CheckoutForm, CustomerDetails, Order, OrderError};
pub use product::{NewReview, Product, ProductDraft, ProductFields, Review};
pub use session::keys as session_keys;
pub use user::{LoginRequest, RegisterRequest, User};
pub use validation::ValidationError;

/// Today's date in the store's `dd/mm/yyyy` format.
#[must_use]
pub fn today() -> String {
    chrono::Local::now().format("%d/%m/%Y").to_string()
}
