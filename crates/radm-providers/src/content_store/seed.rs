//! JSON fixtures for the in-memory content store
//!
//! ```json
//! {
//!   "workspaces": [
//!     { "id": "ws1", "nodes": [ { "path": "/com/acme/Vehicle/1.0.0", "properties": {} } ] }
//!   ],
//!   "namespaces": [
//!     { "name": "com.acme", "workspaceId": "ws1", "models": [ ... ] }
//!   ]
//! }
//! ```

use super::in_memory::InMemoryContentStore;
use radm_domain::entities::{ModelRecord, NamespaceRecord};
use radm_domain::error::{Error, Result};
use radm_domain::value_objects::{NodePath, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Node fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSeed {
    /// Hierarchical path inside the workspace
    pub path: String,
    /// Node properties
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

/// Workspace fixture
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceSeed {
    /// Workspace id
    pub id: String,
    /// Nodes to create; missing ancestors are created implicitly
    #[serde(default)]
    pub nodes: Vec<NodeSeed>,
}

/// Namespace fixture with its models
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceSeed {
    /// Namespace name
    pub name: String,
    /// Workspace holding the namespace's nodes
    pub workspace_id: String,
    /// Models held by the namespace
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

/// Complete store fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSeed {
    /// Workspaces and their node trees
    #[serde(default)]
    pub workspaces: Vec<WorkspaceSeed>,
    /// Namespaces and their models
    #[serde(default)]
    pub namespaces: Vec<NamespaceSeed>,
}

impl StoreSeed {
    /// Parse a fixture from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a fixture file
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::Io {
            message: format!("Failed to read store seed {}: {e}", path.display()),
            source: Some(Box::new(e)),
        })?;
        Self::from_json(&json)
    }
}

impl InMemoryContentStore {
    /// Build a store populated from a fixture
    ///
    /// Records are written in fixture order, so store order and revisions
    /// follow the file.
    pub fn from_seed(seed: StoreSeed) -> Result<Self> {
        let store = Self::new();

        for workspace in seed.workspaces {
            store.create_workspace(&workspace.id);
            for node in workspace.nodes {
                let path = NodePath::new(workspace.id.as_str(), &node.path)?;
                store.put_node(&path, node.properties)?;
            }
        }

        let mut model_count = 0;
        let namespace_count = seed.namespaces.len();
        for namespace in seed.namespaces {
            store.put_namespace(NamespaceRecord {
                name: namespace.name.clone(),
                workspace_id: namespace.workspace_id,
                revision: 0,
            });
            for model in namespace.models {
                store.put_model(&namespace.name, model)?;
                model_count += 1;
            }
        }

        info!(
            namespaces = namespace_count,
            models = model_count,
            "Seeded in-memory content store"
        );
        Ok(store)
    }
}
