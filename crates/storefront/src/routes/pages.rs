//! Page rendering and navigation handlers.
//!
//! The client never decides what to show: it asks for the active page
//! (`GET /`) or sends a navigation intent and receives the resulting
//! [`PageView`]. Everything in the view is derived from the active history
//! entry plus the shared store.

use axum::{
    Json,
    extract::{Query, State},
};
use gymstore_core::{ProductId, Theme};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use super::cart::CartView;
use super::products::{ProductCard, ProductDetailView, cards};
use crate::error::{Result, add_breadcrumb};
use crate::models::article::{NUTRITION_KNOWLEDGE, SUPPLEMENT_KNOWLEDGE};
use crate::models::{Article, Brand, Order, User};
use crate::navigation::{InfoContent, ListingFilter, Page};
use crate::shopper::Shopper;
use crate::state::AppState;
use crate::store::{ListingSort, Store};

/// Best sellers shown on the home page.
const HOME_BEST_SELLERS: usize = 12;

/// Categories given their own row on the home page.
const HOME_CATEGORY_ROWS: [&str; 3] = ["Whey Protein", "Tăng sức mạnh", "Hỗ trợ sức khỏe"];

/// Products per home page category row.
const HOME_ROW_LENGTH: usize = 6;

/// A category row on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub products: Vec<ProductCard>,
}

/// Data for the page being shown.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PageContent {
    Home {
        featured_products: Vec<ProductCard>,
        best_sellers: Vec<ProductCard>,
        category_rows: Vec<CategoryRow>,
        featured_brands: Vec<Brand>,
        supplement_articles: Vec<Article>,
        nutrition_articles: Vec<Article>,
    },
    ProductDetail(ProductDetailView),
    /// The product was removed from the catalog after it was opened.
    ProductUnavailable { product_id: ProductId },
    CategoryListing {
        filter: ListingFilter,
        sort: ListingSort,
        products: Vec<ProductCard>,
    },
    Checkout { cart: CartView },
    Account { user: Option<User> },
    OrderHistory { orders: Vec<Order> },
    Info { content: InfoContent },
    KnowledgeList {
        category: String,
        articles: Vec<Article>,
    },
    BrandsListing { brands: Vec<Brand> },
}

impl PageContent {
    fn render(page: &Page, shopper: &Shopper, store: &Store, sort: ListingSort) -> Self {
        match page {
            Page::Home => Self::Home {
                featured_products: cards(store.featured_products()),
                best_sellers: cards(store.best_sellers(HOME_BEST_SELLERS)),
                category_rows: HOME_CATEGORY_ROWS
                    .iter()
                    .map(|category| CategoryRow {
                        category: (*category).to_owned(),
                        products: cards(store.products_in_category(category, HOME_ROW_LENGTH)),
                    })
                    .collect(),
                featured_brands: store.featured_brands().into_iter().cloned().collect(),
                supplement_articles: owned(store.articles_in_category(SUPPLEMENT_KNOWLEDGE)),
                nutrition_articles: owned(store.articles_in_category(NUTRITION_KNOWLEDGE)),
            },
            Page::ProductDetail { product_id } => store.product(*product_id).map_or(
                Self::ProductUnavailable {
                    product_id: *product_id,
                },
                |product| Self::ProductDetail(ProductDetailView::new(store, product)),
            ),
            Page::CategoryListing { filter } => Self::CategoryListing {
                filter: filter.clone(),
                sort,
                products: cards(store.listing(filter, sort)),
            },
            Page::Checkout => Self::Checkout {
                cart: CartView::from(shopper.cart()),
            },
            Page::Account => Self::Account {
                user: shopper.user().cloned(),
            },
            Page::OrderHistory => Self::OrderHistory {
                orders: shopper
                    .user()
                    .map(|user| store.orders_for(&user.email).into_iter().cloned().collect())
                    .unwrap_or_default(),
            },
            Page::Info { content } => Self::Info {
                content: content.clone(),
            },
            Page::KnowledgeList { category } => Self::KnowledgeList {
                category: category.clone(),
                articles: owned(store.articles_in_category(category)),
            },
            Page::BrandsListing => Self::BrandsListing {
                brands: store.brands().to_vec(),
            },
        }
    }
}

fn owned(articles: Vec<&Article>) -> Vec<Article> {
    articles.into_iter().cloned().collect()
}

/// Everything the client needs to draw the current screen.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    /// The active history entry.
    pub page: Page,
    /// Scroll position to restore, set after going back or home.
    pub scroll_offset: Option<u32>,
    pub depth: usize,
    pub can_go_back: bool,
    pub content: PageContent,
    pub user: Option<User>,
    pub cart_count: u32,
    pub theme: Theme,
    /// True when an admin should see the back-office instead.
    pub in_admin_panel: bool,
}

impl PageView {
    /// Render the shopper's active page.
    #[must_use]
    pub fn render(shopper: &Shopper, store: &Store, scroll_offset: Option<u32>, sort: ListingSort) -> Self {
        let history = shopper.history();
        let page = shopper.active_page();
        Self {
            page: page.clone(),
            scroll_offset,
            depth: history.depth(),
            can_go_back: history.can_go_back(),
            content: PageContent::render(page, shopper, store, sort),
            user: shopper.user().cloned(),
            cart_count: shopper.cart().line_count(),
            theme: shopper.theme(),
            in_admin_panel: shopper.is_in_admin_panel(),
        }
    }
}

/// Listing options for `GET /`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub sort: ListingSort,
}

/// Where to navigate.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NavigationTarget {
    Product { product_id: ProductId },
    Category { name: String },
    Brand { name: String },
    Info { title: String, body: String },
    Knowledge { category: String },
    Brands,
    Checkout,
    Account,
    OrderHistory,
}

/// A navigation intent with the scroll position being left.
#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub target: NavigationTarget,
    #[serde(default)]
    pub scroll_offset: u32,
}

async fn respond(
    state: &AppState,
    shopper: &Shopper,
    scroll_offset: Option<u32>,
    sort: ListingSort,
) -> PageView {
    let store = state.store().read().await;
    PageView::render(shopper, &store, scroll_offset, sort)
}

/// Render the active page.
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageView>> {
    let shopper = Shopper::load(&session).await?;
    Ok(Json(respond(&state, &shopper, None, query.sort).await))
}

/// Push a page onto the history.
#[instrument(skip(state, session))]
pub async fn navigate(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<PageView>> {
    let mut shopper = Shopper::load(&session).await?;
    let scroll = request.scroll_offset;

    match request.target {
        NavigationTarget::Product { product_id } => {
            state.store().read().await.require_product(product_id)?;
            shopper.select_product(product_id, scroll);
        }
        NavigationTarget::Category { name } => shopper.select_category(&name, scroll),
        NavigationTarget::Brand { name } => shopper.select_brand(&name, scroll),
        NavigationTarget::Info { title, body } => {
            shopper.open_info(InfoContent { title, body }, scroll);
        }
        NavigationTarget::Knowledge { category } => shopper.open_knowledge(&category, scroll),
        NavigationTarget::Brands => shopper.open_brands(scroll),
        NavigationTarget::Checkout => shopper.open_checkout(scroll)?,
        NavigationTarget::Account => shopper.open_account(scroll)?,
        NavigationTarget::OrderHistory => shopper.open_order_history(scroll)?,
    }
    shopper.save(&session).await?;

    let depth = shopper.history().depth().to_string();
    add_breadcrumb("navigation", shopper.active_page().name(), &[("depth", depth.as_str())]);
    Ok(Json(respond(&state, &shopper, None, ListingSort::Default).await))
}

/// Pop the history, restoring the previous page and its scroll position.
#[instrument(skip(state, session))]
pub async fn back(State(state): State<AppState>, session: Session) -> Result<Json<PageView>> {
    let mut shopper = Shopper::load(&session).await?;
    let restored = shopper.go_back();
    shopper.save(&session).await?;
    Ok(Json(respond(&state, &shopper, restored, ListingSort::Default).await))
}

/// Return to the nearest home entry, scrolled to the top.
#[instrument(skip(state, session))]
pub async fn home(State(state): State<AppState>, session: Session) -> Result<Json<PageView>> {
    let mut shopper = Shopper::load(&session).await?;
    shopper.go_home();
    shopper.save(&session).await?;
    Ok(Json(respond(&state, &shopper, Some(0), ListingSort::Default).await))
}
