//! Application-managed navigation history.
//!
//! The storefront does not lean on browser history. Every forward navigation
//! pushes a typed [`HistoryEntry`] onto a [`NavigationHistory`], and "back"
//! pops it again, so returning to a filtered listing restores both the
//! filter and the scroll position the shopper left it at.
//!
//! # Invariants
//!
//! - The stack is never empty and its first entry is always [`Page::Home`].
//! - The last entry is the active one; rendering derives only from it.
//! - An entry's `scroll_offset` is written when the entry stops being active,
//!   so the value on the active entry is stale.

use gymstore_core::ProductId;
use serde::{Deserialize, Serialize};

static HOME_ENTRY: HistoryEntry = HistoryEntry {
    page: Page::Home,
    scroll_offset: 0,
};

/// Which attribute a product listing is filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Category,
    Brand,
}

/// Filter applied to a category listing page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingFilter {
    pub kind: FilterKind,
    pub value: String,
}

impl ListingFilter {
    /// Filter on a category (or sub-category) name.
    #[must_use]
    pub fn category(value: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Category,
            value: value.into(),
        }
    }

    /// Filter on a brand name.
    #[must_use]
    pub fn brand(value: impl Into<String>) -> Self {
        Self {
            kind: FilterKind::Brand,
            value: value.into(),
        }
    }
}

/// Static content shown on an info page (shipping policy, about us, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoContent {
    pub title: String,
    pub body: String,
}

/// A storefront view, carrying only the payload that view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Page {
    Home,
    ProductDetail { product_id: ProductId },
    CategoryListing { filter: ListingFilter },
    Checkout,
    Account,
    OrderHistory,
    Info { content: InfoContent },
    KnowledgeList { category: String },
    BrandsListing,
}

impl Page {
    /// Whether this is the home page.
    #[must_use]
    pub const fn is_home(&self) -> bool {
        matches!(self, Self::Home)
    }

    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ProductDetail { .. } => "product-detail",
            Self::CategoryListing { .. } => "category-listing",
            Self::Checkout => "checkout",
            Self::Account => "account",
            Self::OrderHistory => "order-history",
            Self::Info { .. } => "info",
            Self::KnowledgeList { .. } => "knowledge-list",
            Self::BrandsListing => "brands-listing",
        }
    }

    /// The selected product, if this is a product detail page.
    #[must_use]
    pub const fn selected_product(&self) -> Option<ProductId> {
        match self {
            Self::ProductDetail { product_id } => Some(*product_id),
            _ => None,
        }
    }

    /// The listing filter, if this is a category listing.
    #[must_use]
    pub const fn listing_filter(&self) -> Option<&ListingFilter> {
        match self {
            Self::CategoryListing { filter } => Some(filter),
            _ => None,
        }
    }
}

/// One navigated view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub page: Page,
    /// Vertical scroll position captured when this entry stopped being active.
    pub scroll_offset: u32,
}

impl HistoryEntry {
    /// A fresh entry for `page`, scrolled to the top.
    #[must_use]
    pub const fn new(page: Page) -> Self {
        Self {
            page,
            scroll_offset: 0,
        }
    }
}

/// Errors rebuilding a history from stored entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("navigation history cannot be empty")]
    Empty,
    #[error("navigation history must start at the home page, found {0}")]
    RootNotHome(&'static str),
}

/// The back-stack of page views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<HistoryEntry>", into = "Vec<HistoryEntry>")]
pub struct NavigationHistory {
    entries: Vec<HistoryEntry>,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationHistory {
    /// A history holding a single home entry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Page::Home)],
        }
    }

    /// Navigate forward to `page`.
    ///
    /// `scroll_offset` is where the shopper was on the outgoing page; it is
    /// stored on that entry so [`pop`](Self::pop) can hand it back later.
    pub fn push(&mut self, page: Page, scroll_offset: u32) {
        if let Some(active) = self.entries.last_mut() {
            active.scroll_offset = scroll_offset;
        }
        tracing::debug!(page = page.name(), depth = self.entries.len() + 1, "push");
        self.entries.push(HistoryEntry::new(page));
    }

    /// Go back one page.
    ///
    /// Returns the scroll offset to restore on the newly active entry, or
    /// `None` when already at the root (a no-op).
    pub fn pop(&mut self) -> Option<u32> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        let active = self.active();
        tracing::debug!(page = active.page.name(), depth = self.entries.len(), "pop");
        Some(active.scroll_offset)
    }

    /// Replace the whole stack with a single fresh home entry.
    pub fn reset_to_home(&mut self) {
        self.entries.clear();
        self.entries.push(HistoryEntry::new(Page::Home));
    }

    /// Truncate the stack so it ends at the most recent home entry.
    pub fn return_to_nearest_home(&mut self) {
        match self.entries.iter().rposition(|entry| entry.page.is_home()) {
            Some(index) => self.entries.truncate(index + 1),
            // Unreachable while the root-is-home invariant holds.
            None => self.reset_to_home(),
        }
    }

    /// The entry currently being rendered.
    #[must_use]
    pub fn active(&self) -> &HistoryEntry {
        self.entries.last().unwrap_or(&HOME_ENTRY)
    }

    /// Number of entries on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Whether [`pop`](Self::pop) would do anything.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// All entries, root first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl TryFrom<Vec<HistoryEntry>> for NavigationHistory {
    type Error = HistoryError;

    fn try_from(entries: Vec<HistoryEntry>) -> Result<Self, Self::Error> {
        let root = entries.first().ok_or(HistoryError::Empty)?;
        if !root.page.is_home() {
            return Err(HistoryError::RootNotHome(root.page.name()));
        }
        Ok(Self { entries })
    }
}

impl From<NavigationHistory> for Vec<HistoryEntry> {
    fn from(history: NavigationHistory) -> Self {
        history.entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i32) -> Page {
        Page::ProductDetail {
            product_id: ProductId::new(id),
        }
    }

    fn whey_listing() -> Page {
        Page::CategoryListing {
            filter: ListingFilter::category("Whey Protein"),
        }
    }

    #[test]
    fn test_starts_at_home() {
        let history = NavigationHistory::new();
        assert_eq!(history.depth(), 1);
        assert!(history.active().page.is_home());
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_push_then_pop_returns_to_root_and_no_further() {
        let mut history = NavigationHistory::new();
        let pages = [product(1), whey_listing(), Page::Checkout, Page::BrandsListing];
        for (i, page) in pages.iter().enumerate() {
            history.push(page.clone(), 0);
            assert_eq!(history.depth(), i + 2);
        }

        for _ in 0..pages.len() {
            assert!(history.pop().is_some());
        }
        assert_eq!(history.depth(), 1);
        assert_eq!(history.pop(), None);
        assert_eq!(history.pop(), None);
        assert_eq!(history.depth(), 1);
        assert!(history.active().page.is_home());
    }

    #[test]
    fn test_pop_restores_captured_scroll_offset() {
        let mut history = NavigationHistory::new();
        history.push(whey_listing(), 120);
        history.push(product(3), 860);

        assert_eq!(history.pop(), Some(860));
        assert_eq!(
            history.active().page.listing_filter(),
            Some(&ListingFilter::category("Whey Protein"))
        );
        assert_eq!(history.pop(), Some(120));
        assert!(history.active().page.is_home());
    }

    #[test]
    fn test_new_entry_carries_only_its_payload() {
        let mut history = NavigationHistory::new();
        history.push(product(1), 0);
        history.push(whey_listing(), 300);

        let active = history.active();
        assert_eq!(active.page.listing_filter(), Some(&ListingFilter::category("Whey Protein")));
        assert_eq!(active.page.selected_product(), None);
        assert_eq!(active.scroll_offset, 0);
    }

    #[test]
    fn test_return_to_nearest_home_truncates_at_last_home() {
        let mut history = NavigationHistory::new();
        history.push(product(1), 10);
        history.push(whey_listing(), 20);
        history.push(Page::Home, 30);
        history.push(product(2), 40);
        assert_eq!(history.depth(), 5);

        history.return_to_nearest_home();
        assert_eq!(history.depth(), 4);
        let kinds: Vec<_> = history.entries().iter().map(|e| e.page.name()).collect();
        assert_eq!(kinds, ["home", "product-detail", "category-listing", "home"]);
    }

    #[test]
    fn test_return_to_nearest_home_at_home_is_noop() {
        let mut history = NavigationHistory::new();
        history.push(product(1), 10);
        history.push(Page::Home, 0);
        let before = history.clone();
        history.return_to_nearest_home();
        assert_eq!(history, before);
    }

    #[test]
    fn test_reset_to_home() {
        let mut history = NavigationHistory::new();
        history.push(product(1), 500);
        history.push(Page::Account, 20);
        history.reset_to_home();
        assert_eq!(history.entries(), [HistoryEntry::new(Page::Home)]);
    }

    #[test]
    fn test_serde_roundtrip_preserves_stack() {
        let mut history = NavigationHistory::new();
        history.push(
            Page::Info {
                content: InfoContent {
                    title: "Chính sách đổi trả".to_string(),
                    body: "Đổi trả trong 7 ngày.".to_string(),
                },
            },
            75,
        );
        history.push(Page::KnowledgeList { category: "Kiến thức Supplement".to_string() }, 0);

        let json = serde_json::to_string(&history).unwrap();
        let restored: NavigationHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
    }

    #[test]
    fn test_deserialize_rejects_broken_stacks() {
        assert!(serde_json::from_str::<NavigationHistory>("[]").is_err());

        let not_home = r#"[{"page":{"kind":"checkout"},"scroll_offset":0}]"#;
        assert!(serde_json::from_str::<NavigationHistory>(not_home).is_err());

        assert_eq!(
            NavigationHistory::try_from(vec![HistoryEntry::new(Page::Account)]),
            Err(HistoryError::RootNotHome("account"))
        );
    }
}
