//! In-memory search index provider implementation
//!
//! Keeps the committed snapshot behind an `ArcSwap`. Readers load the current
//! `Arc` without locking; a commit swaps in the replacement in one step, so a
//! reader sees either the previous or the next snapshot and never a mix.

use arc_swap::ArcSwap;
use async_trait::async_trait;
use radm_domain::error::Result;
use radm_domain::ports::providers::SearchIndexProvider;
use radm_domain::value_objects::IndexSnapshot;
use std::sync::Arc;
use tracing::debug;

/// In-memory search index provider
pub struct InMemorySearchIndex {
    current: ArcSwap<IndexSnapshot>,
}

impl InMemorySearchIndex {
    /// Create an index holding the empty initial snapshot
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(IndexSnapshot::default()),
        }
    }
}

impl Default for InMemorySearchIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchIndexProvider for InMemorySearchIndex {
    fn snapshot(&self) -> Arc<IndexSnapshot> {
        self.current.load_full()
    }

    async fn commit(&self, next: IndexSnapshot) -> Result<()> {
        debug!(
            namespaces = next.namespaces.len(),
            models = next.models.len(),
            "Publishing index snapshot"
        );
        self.current.store(Arc::new(next));
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
