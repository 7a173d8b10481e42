//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::db::{EventStore, KeyValueStorage};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// store and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    store: EventStore,
}

impl AppState {
    /// Create a new application state over `storage`.
    #[must_use]
    pub fn new(config: SiteConfig, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: EventStore::new(storage),
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the registration and selection store.
    #[must_use]
    pub fn store(&self) -> &EventStore {
        &self.inner.store
    }
}
