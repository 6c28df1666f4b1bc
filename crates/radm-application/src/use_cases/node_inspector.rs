//! Node Inspector Use Case
//!
//! Reads and removes single content store nodes. Deletes take an exclusive
//! lock on the target node only; reads and deletes of other nodes proceed
//! concurrently.

use crate::ports::services::NodeInspectorInterface;
use dashmap::DashMap;
use radm_domain::error::{Error, Result};
use radm_domain::ports::providers::ContentStoreProvider;
use radm_domain::value_objects::{NodePath, NodeSnapshot};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Node inspector implementation
pub struct NodeInspectorImpl {
    store: Arc<dyn ContentStoreProvider>,
    node_locks: DashMap<NodePath, Arc<Mutex<()>>>,
}

impl NodeInspectorImpl {
    /// Create a node inspector over the given store
    pub fn new(store: Arc<dyn ContentStoreProvider>) -> Self {
        Self {
            store,
            node_locks: DashMap::new(),
        }
    }

    /// Number of nodes with a delete lock currently registered
    pub fn active_node_locks(&self) -> usize {
        self.node_locks.len()
    }

    fn node_lock(&self, path: &NodePath) -> Arc<Mutex<()>> {
        self.node_locks.entry(path.clone()).or_default().value().clone()
    }
}

/// Drops the per-node lock entry once no other delete holds it
///
/// Runs on every exit from `delete_node`, including cancellation at a deadline.
struct NodeLockRelease<'a> {
    locks: &'a DashMap<NodePath, Arc<Mutex<()>>>,
    path: &'a NodePath,
}

impl Drop for NodeLockRelease<'_> {
    fn drop(&mut self) {
        // Two references left means only the map and the releasing caller hold it
        self.locks
            .remove_if(self.path, |_, lock| Arc::strong_count(lock) <= 2);
    }
}

#[async_trait::async_trait]
impl NodeInspectorInterface for NodeInspectorImpl {
    async fn get_node(&self, path: &NodePath) -> Result<NodeSnapshot> {
        self.store
            .get_node(path)
            .await?
            .ok_or_else(|| Error::not_found(format!("node {path}")))
    }

    async fn delete_node(&self, path: &NodePath, recursive: bool) -> Result<usize> {
        let lock = self.node_lock(path);
        // Declared after `lock` so the entry check still counts this caller's reference
        let _release = NodeLockRelease {
            locks: &self.node_locks,
            path,
        };
        let removed = {
            let _guard = lock.lock().await;
            self.store.delete_node(path, recursive).await
        }?;
        info!(node = %path, recursive, removed, "Node deleted");
        Ok(removed)
    }
}
