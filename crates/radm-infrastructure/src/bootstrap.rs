//! Composition root
//!
//! Builds the content store, search index and admin services from an
//! `AppConfig`.
//!
//! ```text
//! AppConfig → InMemoryContentStore (seeded) ─┬→ DiagnosticsServiceImpl
//!                                            ├→ NodeInspectorImpl
//!           InMemorySearchIndex ─────────────┴→ ReindexServiceImpl
//! ```

use crate::config::AppConfig;
use radm_application::ports::services::{
    DiagnosticsServiceInterface, NodeInspectorInterface, ReindexServiceInterface,
};
use radm_application::use_cases::{DiagnosticsServiceImpl, NodeInspectorImpl, ReindexServiceImpl};
use radm_domain::error::Result;
use radm_domain::ports::providers::{ContentStoreProvider, SearchIndexProvider};
use radm_providers::content_store::{InMemoryContentStore, StoreSeed};
use radm_providers::search_index::InMemorySearchIndex;
use std::sync::Arc;
use tracing::info;

/// Application context holding the wired services
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    store: Arc<dyn ContentStoreProvider>,
    index: Arc<dyn SearchIndexProvider>,
    diagnostics: Arc<dyn DiagnosticsServiceInterface>,
    inspector: Arc<dyn NodeInspectorInterface>,
    reindex: Arc<dyn ReindexServiceInterface>,
}

impl AppContext {
    /// Wire services over an existing store and index
    pub fn with_providers(
        config: AppConfig,
        store: Arc<dyn ContentStoreProvider>,
        index: Arc<dyn SearchIndexProvider>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            diagnostics: Arc::new(DiagnosticsServiceImpl::new(store.clone())),
            inspector: Arc::new(NodeInspectorImpl::new(store.clone())),
            reindex: Arc::new(ReindexServiceImpl::new(store.clone(), index.clone())),
            store,
            index,
        }
    }

    pub fn store(&self) -> Arc<dyn ContentStoreProvider> {
        self.store.clone()
    }

    pub fn index(&self) -> Arc<dyn SearchIndexProvider> {
        self.index.clone()
    }

    pub fn diagnostics(&self) -> Arc<dyn DiagnosticsServiceInterface> {
        self.diagnostics.clone()
    }

    pub fn inspector(&self) -> Arc<dyn NodeInspectorInterface> {
        self.inspector.clone()
    }

    pub fn reindex(&self) -> Arc<dyn ReindexServiceInterface> {
        self.reindex.clone()
    }
}

/// Build the application context from configuration
///
/// The store is seeded from `store.seed_file` when set and starts empty
/// otherwise.
pub fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = match &config.store.seed_file {
        Some(path) => {
            info!(seed = %path.display(), "Loading content store seed");
            InMemoryContentStore::from_seed(StoreSeed::from_file(path)?)?
        }
        None => InMemoryContentStore::new(),
    };
    let store: Arc<dyn ContentStoreProvider> = Arc::new(store);
    let index: Arc<dyn SearchIndexProvider> = Arc::new(InMemorySearchIndex::new());

    info!(
        store = store.provider_name(),
        index = index.provider_name(),
        "Application context initialized"
    );
    Ok(AppContext::with_providers(config, store, index))
}
