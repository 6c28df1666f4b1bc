//! In-memory content store provider implementation
//!
//! Holds namespace/model records and workspace node trees in concurrent maps.
//! Data is not persisted and will be lost on restart. Each workspace lives in
//! its own map shard, so a delete only blocks readers of the same shard for
//! the duration of the in-memory update.

use async_trait::async_trait;
use dashmap::DashMap;
use radm_domain::entities::{ModelRecord, NamespaceRecord};
use radm_domain::error::{Error, Result};
use radm_domain::ports::providers::ContentStoreProvider;
use radm_domain::value_objects::{NodePath, NodeSnapshot, PropertyValue, is_path_within};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

/// Stored state of a single node
#[derive(Debug, Clone, Default)]
struct NodeEntry {
    properties: BTreeMap<String, PropertyValue>,
    children: Vec<String>,
}

/// Node tree of one workspace keyed by normalized path
#[derive(Debug, Default)]
struct WorkspaceTree {
    nodes: BTreeMap<String, NodeEntry>,
}

impl WorkspaceTree {
    fn with_root() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), NodeEntry::default());
        Self { nodes }
    }

    /// Paths removed by deleting `target`, or the reason it is blocked
    fn removal_set(&self, target: &NodePath, recursive: bool) -> Result<Vec<String>> {
        let entry = self
            .nodes
            .get(target.path())
            .ok_or_else(|| Error::not_found(format!("node {target}")))?;

        if target.is_root() {
            return Err(Error::conflict(format!(
                "Root node of workspace '{}' cannot be deleted",
                target.workspace_id()
            )));
        }

        if !recursive && !entry.children.is_empty() {
            return Err(Error::conflict(format!(
                "Node {target} has {} child node(s); delete recursively to remove them",
                entry.children.len()
            )));
        }

        let removed: Vec<String> = if recursive {
            self.nodes
                .range(target.path().to_string()..)
                .map(|(path, _)| path)
                .take_while(|path| path.starts_with(target.path()))
                .filter(|path| is_path_within(path, target.path()))
                .cloned()
                .collect()
        } else {
            vec![target.path().to_string()]
        };

        for (path, node) in &self.nodes {
            if removed.iter().any(|r| r == path) {
                continue;
            }
            for (name, value) in &node.properties {
                if let Some(referenced) = value.as_reference() {
                    if is_path_within(referenced, target.path()) {
                        return Err(Error::conflict(format!(
                            "Node {target} is referenced by property '{name}' of {path}"
                        )));
                    }
                }
            }
        }

        Ok(removed)
    }
}

/// In-memory content store provider
///
/// Useful for development, seeding from fixtures, and testing.
pub struct InMemoryContentStore {
    workspaces: DashMap<String, WorkspaceTree>,
    namespaces: DashMap<String, (u64, NamespaceRecord)>,
    models: DashMap<String, Vec<ModelRecord>>,
    revision: AtomicU64,
    online: AtomicBool,
}

impl InMemoryContentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            workspaces: DashMap::new(),
            namespaces: DashMap::new(),
            models: DashMap::new(),
            revision: AtomicU64::new(0),
            online: AtomicBool::new(true),
        }
    }

    fn next_revision(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn ensure_online(&self) -> Result<()> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(Error::service_unavailable("In-memory content store is offline"))
        }
    }

    /// Simulate an outage (`false`) or recovery (`true`)
    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    /// Create a workspace with an empty root node; no-op if it exists
    pub fn create_workspace(&self, workspace_id: &str) {
        self.workspaces
            .entry(workspace_id.to_string())
            .or_insert_with(WorkspaceTree::with_root);
    }

    /// Write a node, creating missing ancestors and the workspace
    ///
    /// Replaces the properties of an existing node and keeps its children.
    pub fn put_node(
        &self,
        path: &NodePath,
        properties: BTreeMap<String, PropertyValue>,
    ) -> Result<()> {
        let mut tree = self
            .workspaces
            .entry(path.workspace_id().to_string())
            .or_insert_with(WorkspaceTree::with_root);

        let mut chain = Vec::new();
        let mut cursor = Some(path.clone());
        while let Some(current) = cursor {
            if tree.nodes.contains_key(current.path()) {
                break;
            }
            cursor = current.parent();
            chain.push(current);
        }

        for created in chain.into_iter().rev() {
            if let (Some(parent), Some(name)) = (created.parent(), created.name()) {
                if let Some(parent_entry) = tree.nodes.get_mut(parent.path()) {
                    parent_entry.children.push(name.to_string());
                }
            }
            tree.nodes
                .insert(created.path().to_string(), NodeEntry::default());
        }

        if let Some(entry) = tree.nodes.get_mut(path.path()) {
            entry.properties = properties;
        }
        Ok(())
    }

    /// Insert or replace a namespace record, assigning a fresh revision
    pub fn put_namespace(&self, mut record: NamespaceRecord) -> u64 {
        let revision = self.next_revision();
        record.revision = revision;
        let order = self
            .namespaces
            .get(&record.name)
            .map_or(revision, |existing| existing.0);
        self.models.entry(record.name.clone()).or_default();
        self.namespaces.insert(record.name.clone(), (order, record));
        revision
    }

    /// Insert or replace a model record under `namespace`, assigning a fresh revision
    pub fn put_model(&self, namespace: &str, mut record: ModelRecord) -> Result<u64> {
        if !self.namespaces.contains_key(namespace) {
            return Err(Error::not_found(format!("namespace '{namespace}'")));
        }
        let revision = self.next_revision();
        record.revision = revision;
        let mut models = self.models.entry(namespace.to_string()).or_default();
        match models.iter_mut().find(|m| m.id == record.id) {
            Some(existing) => *existing = record,
            None => models.push(record),
        }
        Ok(revision)
    }

    /// Remove a namespace record and its models
    pub fn remove_namespace(&self, name: &str) -> bool {
        self.models.remove(name);
        self.namespaces.remove(name).is_some()
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStoreProvider for InMemoryContentStore {
    async fn ping(&self) -> Result<()> {
        self.ensure_online()
    }

    async fn list_namespaces(&self) -> Result<Vec<NamespaceRecord>> {
        self.ensure_online()?;
        let mut entries: Vec<(u64, NamespaceRecord)> = self
            .namespaces
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(order, _)| *order);
        Ok(entries.into_iter().map(|(_, record)| record).collect())
    }

    async fn list_models(&self, namespace: &str) -> Result<Vec<ModelRecord>> {
        self.ensure_online()?;
        Ok(self
            .models
            .get(namespace)
            .map(|models| models.value().clone())
            .unwrap_or_default())
    }

    async fn workspace_exists(&self, workspace_id: &str) -> Result<bool> {
        self.ensure_online()?;
        Ok(self.workspaces.contains_key(workspace_id))
    }

    async fn get_node(&self, path: &NodePath) -> Result<Option<NodeSnapshot>> {
        self.ensure_online()?;
        let Some(tree) = self.workspaces.get(path.workspace_id()) else {
            return Ok(None);
        };
        Ok(tree.nodes.get(path.path()).map(|entry| NodeSnapshot {
            path: path.clone(),
            properties: entry.properties.clone(),
            children: entry.children.clone(),
        }))
    }

    async fn delete_node(&self, path: &NodePath, recursive: bool) -> Result<usize> {
        self.ensure_online()?;
        let mut tree = self
            .workspaces
            .get_mut(path.workspace_id())
            .ok_or_else(|| Error::not_found(format!("node {path}")))?;

        let removed = tree.removal_set(path, recursive)?;
        for key in &removed {
            tree.nodes.remove(key);
        }
        if let (Some(parent), Some(name)) = (path.parent(), path.name()) {
            if let Some(parent_entry) = tree.nodes.get_mut(parent.path()) {
                parent_entry.children.retain(|child| child != name);
            }
        }

        debug!(node = %path, removed = removed.len(), "Deleted node");
        Ok(removed.len())
    }

    fn provider_name(&self) -> &str {
        "in_memory"
    }
}
