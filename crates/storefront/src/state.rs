//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::StorefrontConfig;
use crate::services::auth::AuthService;
use crate::store::Store;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the configuration and the shared catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    store: RwLock<Store>,
}

impl AppState {
    /// Create application state around the seeded catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_store(config, Store::seeded())
    }

    /// Create application state around an existing store.
    #[must_use]
    pub fn with_store(config: StorefrontConfig, store: Store) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(store),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The shared catalog and order book.
    #[must_use]
    pub fn store(&self) -> &RwLock<Store> {
        &self.inner.store
    }

    /// Authentication using the configured admin domain.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.config.admin_email_domain)
    }
}
