//! Content store wrapper with switchable latency

use async_trait::async_trait;
use radm_domain::entities::{ModelRecord, NamespaceRecord};
use radm_domain::error::Result;
use radm_domain::ports::providers::ContentStoreProvider;
use radm_domain::value_objects::{NodePath, NodeSnapshot};
use radm_providers::content_store::InMemoryContentStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Delays every call by `delay` while slow mode is on
pub struct SlowStore {
    inner: Arc<InMemoryContentStore>,
    delay: Duration,
    slow: AtomicBool,
}

impl SlowStore {
    pub fn new(inner: Arc<InMemoryContentStore>, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            slow: AtomicBool::new(true),
        }
    }

    pub fn set_slow(&self, slow: bool) {
        self.slow.store(slow, Ordering::SeqCst);
    }

    async fn lag(&self) {
        if self.slow.load(Ordering::SeqCst) {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl ContentStoreProvider for SlowStore {
    async fn ping(&self) -> Result<()> {
        self.lag().await;
        self.inner.ping().await
    }

    async fn list_namespaces(&self) -> Result<Vec<NamespaceRecord>> {
        self.lag().await;
        self.inner.list_namespaces().await
    }

    async fn list_models(&self, namespace: &str) -> Result<Vec<ModelRecord>> {
        self.inner.list_models(namespace).await
    }

    async fn workspace_exists(&self, workspace_id: &str) -> Result<bool> {
        self.inner.workspace_exists(workspace_id).await
    }

    async fn get_node(&self, path: &NodePath) -> Result<Option<NodeSnapshot>> {
        self.lag().await;
        self.inner.get_node(path).await
    }

    async fn delete_node(&self, path: &NodePath, recursive: bool) -> Result<usize> {
        self.lag().await;
        self.inner.delete_node(path, recursive).await
    }

    fn provider_name(&self) -> &str {
        "slow"
    }
}
