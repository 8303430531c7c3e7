//! Application state - shared across all handlers.

use std::sync::Arc;

use masterblog_core::StoreError;
use masterblog_core::ports::PostStore;
use masterblog_core::services::PostService;
use masterblog_infra::{InMemoryPostStore, JsonFilePostStore, seed_posts};

use crate::config::{StorageBackend, StorageConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
    pub storage: &'static str,
}

impl AppState {
    /// Build the state for the configured storage backend.
    ///
    /// A file backend whose file does not exist yet gets one, seeded if
    /// seeding is enabled.
    pub async fn new(config: &StorageConfig) -> Result<Self, StoreError> {
        let initial = if config.seed { seed_posts() } else { Vec::new() };

        let store: Arc<dyn PostStore> = match &config.backend {
            StorageBackend::Memory => {
                tracing::info!(posts = initial.len(), "Using in-memory post storage");
                Arc::new(InMemoryPostStore::with_posts(initial))
            }
            StorageBackend::File(path) => {
                let store = JsonFilePostStore::new(path);
                store.create_if_missing(&initial).await?;
                tracing::info!(path = %path.display(), "Using JSON file post storage");
                Arc::new(store)
            }
        };

        Ok(Self::with_store(store, config.backend.name()))
    }

    pub fn with_store(store: Arc<dyn PostStore>, storage: &'static str) -> Self {
        Self {
            posts: Arc::new(PostService::new(store)),
            storage,
        }
    }
}
