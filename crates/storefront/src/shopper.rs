//! Per-visitor state: who is signed in, where they are, what they carry.
//!
//! A [`Shopper`] lives in the visitor's session. Handlers load it at the
//! start of a request, apply one transition and save it back.

use gymstore_core::{ProductId, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_sessions::Session;

use crate::cart::Cart;
use crate::models::{User, session_keys};
use crate::navigation::{InfoContent, ListingFilter, NavigationHistory, Page};

/// Main-menu entry that opens the brands page instead of a listing.
pub const BRANDS_MENU_ENTRY: &str = "Thương hiệu";

/// Navigation that was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The page needs a signed-in user; the client should open the login dialog.
    #[error("sign in to open the {page} page")]
    LoginRequired { page: &'static str },
}

/// A visitor's session state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shopper {
    user: Option<User>,
    history: NavigationHistory,
    cart: Cart,
    theme: Theme,
    admin_viewing_site: bool,
}

impl Shopper {
    /// A signed-out visitor on the home page with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the shopper from the session, starting fresh when absent.
    ///
    /// A stored value that no longer deserializes (for example a history
    /// that does not start at home) is discarded with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn load(session: &Session) -> Result<Self, tower_sessions::session::Error> {
        let Some(raw) = session.get::<serde_json::Value>(session_keys::SHOPPER).await? else {
            return Ok(Self::new());
        };

        match serde_json::from_value(raw) {
            Ok(shopper) => Ok(shopper),
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable shopper state");
                Ok(Self::new())
            }
        }
    }

    /// Write the shopper back to the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store fails.
    pub async fn save(&self, session: &Session) -> Result<(), tower_sessions::session::Error> {
        session.insert(session_keys::SHOPPER, self).await
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn history(&self) -> &NavigationHistory {
        &self.history
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// The page to render.
    #[must_use]
    pub fn active_page(&self) -> &Page {
        &self.history.active().page
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn select_product(&mut self, product_id: ProductId, scroll_offset: u32) {
        self.history.push(Page::ProductDetail { product_id }, scroll_offset);
    }

    /// Open a category listing, or the brands page for [`BRANDS_MENU_ENTRY`].
    pub fn select_category(&mut self, category: &str, scroll_offset: u32) {
        if category == BRANDS_MENU_ENTRY {
            self.open_brands(scroll_offset);
            return;
        }
        self.history.push(
            Page::CategoryListing {
                filter: ListingFilter::category(category),
            },
            scroll_offset,
        );
    }

    pub fn select_brand(&mut self, brand: &str, scroll_offset: u32) {
        self.history.push(
            Page::CategoryListing {
                filter: ListingFilter::brand(brand),
            },
            scroll_offset,
        );
    }

    pub fn open_info(&mut self, content: InfoContent, scroll_offset: u32) {
        self.history.push(Page::Info { content }, scroll_offset);
    }

    pub fn open_knowledge(&mut self, category: &str, scroll_offset: u32) {
        self.history.push(
            Page::KnowledgeList {
                category: category.to_owned(),
            },
            scroll_offset,
        );
    }

    pub fn open_brands(&mut self, scroll_offset: u32) {
        self.history.push(Page::BrandsListing, scroll_offset);
    }

    /// # Errors
    ///
    /// Returns [`NavigationError::LoginRequired`] for signed-out visitors.
    pub fn open_checkout(&mut self, scroll_offset: u32) -> Result<(), NavigationError> {
        self.push_signed_in(Page::Checkout, scroll_offset)
    }

    /// # Errors
    ///
    /// Returns [`NavigationError::LoginRequired`] for signed-out visitors.
    pub fn open_account(&mut self, scroll_offset: u32) -> Result<(), NavigationError> {
        self.push_signed_in(Page::Account, scroll_offset)
    }

    /// # Errors
    ///
    /// Returns [`NavigationError::LoginRequired`] for signed-out visitors.
    pub fn open_order_history(&mut self, scroll_offset: u32) -> Result<(), NavigationError> {
        self.push_signed_in(Page::OrderHistory, scroll_offset)
    }

    fn push_signed_in(&mut self, page: Page, scroll_offset: u32) -> Result<(), NavigationError> {
        if self.user.is_none() {
            return Err(NavigationError::LoginRequired { page: page.name() });
        }
        self.history.push(page, scroll_offset);
        Ok(())
    }

    /// Go back one page, returning the scroll offset to restore.
    pub fn go_back(&mut self) -> Option<u32> {
        self.history.pop()
    }

    pub fn go_home(&mut self) {
        self.history.return_to_nearest_home();
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    pub fn log_in(&mut self, user: User) {
        if user.is_admin() {
            self.admin_viewing_site = false;
        }
        tracing::info!(email = %user.email, role = %user.role, "signed in");
        self.user = Some(user);
        self.history.reset_to_home();
    }

    pub fn log_out(&mut self) {
        self.user = None;
        self.admin_viewing_site = false;
        self.history.reset_to_home();
    }

    /// Clear the cart and return home after a successful checkout.
    pub fn order_placed(&mut self) {
        self.cart.clear();
        self.history.reset_to_home();
    }

    // =========================================================================
    // Back-office
    // =========================================================================

    /// Let an admin browse the storefront. Ignored for everyone else.
    pub fn view_site_as_admin(&mut self) {
        if self.is_admin() {
            self.admin_viewing_site = true;
            self.history.reset_to_home();
        }
    }

    pub const fn return_to_admin_panel(&mut self) {
        self.admin_viewing_site = false;
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Whether the admin back-office, not the storefront, is showing.
    #[must_use]
    pub fn is_in_admin_panel(&self) -> bool {
        self.is_admin() && !self.admin_viewing_site
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use gymstore_core::{Email, Role};
    use tower_sessions::MemoryStore;

    use super::*;
    use crate::navigation::FilterKind;
    use crate::seed;

    fn user(email: &str, role: Role) -> User {
        User {
            name: "Test".to_string(),
            email: Email::parse(email).unwrap(),
            role,
        }
    }

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[test]
    fn test_brands_menu_entry_opens_brands_page() {
        let mut shopper = Shopper::new();
        shopper.select_category(BRANDS_MENU_ENTRY, 0);
        assert_eq!(shopper.active_page(), &Page::BrandsListing);
    }

    #[test]
    fn test_category_then_brand_replaces_filter() {
        let mut shopper = Shopper::new();
        shopper.select_category("Whey Protein", 0);
        assert_eq!(
            shopper.active_page().listing_filter(),
            Some(&ListingFilter::category("Whey Protein"))
        );
        assert_eq!(shopper.active_page().selected_product(), None);

        shopper.select_brand("Rule 1", 120);
        let filter = shopper.active_page().listing_filter().unwrap();
        assert_eq!(filter.kind, FilterKind::Brand);

        assert_eq!(shopper.go_back(), Some(120));
        assert_eq!(
            shopper.active_page().listing_filter().unwrap().kind,
            FilterKind::Category
        );
    }

    #[test]
    fn test_guarded_pages_require_login() {
        let mut shopper = Shopper::new();
        assert_eq!(
            shopper.open_checkout(0),
            Err(NavigationError::LoginRequired { page: "checkout" })
        );
        assert!(shopper.open_account(0).is_err());
        assert!(shopper.open_order_history(0).is_err());
        assert_eq!(shopper.history().depth(), 1);

        shopper.log_in(user("an.nguyen@example.com", Role::Customer));
        assert!(shopper.open_order_history(0).is_ok());
        assert_eq!(shopper.active_page(), &Page::OrderHistory);
    }

    #[test]
    fn test_log_in_and_out_reset_history() {
        let mut shopper = Shopper::new();
        shopper.select_product(ProductId::new(1), 300);
        shopper.log_in(user("an.nguyen@example.com", Role::Customer));
        assert_eq!(shopper.history().depth(), 1);

        shopper.select_product(ProductId::new(2), 0);
        shopper.log_out();
        assert!(shopper.user().is_none());
        assert_eq!(shopper.history().depth(), 1);
    }

    #[test]
    fn test_order_placed_clears_cart() {
        let mut shopper = Shopper::new();
        let products = seed::products();
        shopper.cart_mut().add_line(products.first().unwrap(), 2, None, None);
        shopper.log_in(user("an.nguyen@example.com", Role::Customer));
        shopper.open_checkout(0).unwrap();

        shopper.order_placed();
        assert!(shopper.cart().is_empty());
        assert!(shopper.active_page().is_home());
        assert_eq!(shopper.history().depth(), 1);
    }

    #[test]
    fn test_go_home_keeps_stack_below_nearest_home() {
        let mut shopper = Shopper::new();
        shopper.select_product(ProductId::new(1), 0);
        shopper.select_category("Pre-Workout", 0);
        shopper.go_home();
        assert_eq!(shopper.history().depth(), 1);
    }

    #[test]
    fn test_admin_panel_switching() {
        let mut shopper = Shopper::new();
        shopper.view_site_as_admin();
        assert!(!shopper.is_in_admin_panel());

        shopper.log_in(user("admin@stu.ptit.edu.vn", Role::Admin));
        assert!(shopper.is_in_admin_panel());

        shopper.view_site_as_admin();
        assert!(!shopper.is_in_admin_panel());
        shopper.return_to_admin_panel();
        assert!(shopper.is_in_admin_panel());

        shopper.view_site_as_admin();
        shopper.log_in(user("admin@stu.ptit.edu.vn", Role::Admin));
        assert!(shopper.is_in_admin_panel());
    }

    #[tokio::test]
    async fn test_session_round_trip() {
        let session = session();
        let mut shopper = Shopper::new();
        shopper.select_category("Whey Protein", 480);
        shopper.select_product(ProductId::new(3), 0);
        shopper.set_theme(Theme::Black);
        shopper.save(&session).await.unwrap();

        let loaded = Shopper::load(&session).await.unwrap();
        assert_eq!(loaded, shopper);
    }

    #[tokio::test]
    async fn test_corrupt_history_is_discarded() {
        let session = session();
        let corrupt = serde_json::json!({
            "user": null,
            "history": [{ "page": { "kind": "checkout" }, "scroll_offset": 0 }],
            "cart": { "lines": [] },
            "theme": "default",
            "admin_viewing_site": false,
        });
        session.insert(session_keys::SHOPPER, corrupt).await.unwrap();

        let loaded = Shopper::load(&session).await.unwrap();
        assert_eq!(loaded, Shopper::new());
    }
}
