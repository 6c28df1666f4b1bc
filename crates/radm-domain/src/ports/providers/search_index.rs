use crate::error::Result;
use crate::value_objects::IndexSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

/// Search Index Storage
///
/// Holds the committed search index over namespaces and models. Readers get
/// the current snapshot; a reindex run publishes a complete replacement with
/// [`commit`](SearchIndexProvider::commit). Partial state is never observable.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Currently committed snapshot
    fn snapshot(&self) -> Arc<IndexSnapshot>;

    /// Replace the committed snapshot in one step
    async fn commit(&self, next: IndexSnapshot) -> Result<()>;

    /// Get the name/identifier of this index provider
    fn provider_name(&self) -> &str;
}
