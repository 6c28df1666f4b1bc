//! Namespace and model records

use crate::error::{Error, Result};
use crate::value_objects::NodePath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a model: namespace, name and version
///
/// Displayed and parsed as `namespace:name:version`.
///
/// # Example
///
/// ```
/// use radm_domain::entities::ModelId;
///
/// let id: ModelId = "com.acme:Vehicle:1.0.0".parse().unwrap();
/// assert_eq!(id.namespace, "com.acme");
/// assert_eq!(id.to_string(), "com.acme:Vehicle:1.0.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelId {
    /// Owning namespace
    pub namespace: String,
    /// Model name
    pub name: String,
    /// Model version
    pub version: String,
}

impl ModelId {
    /// Create a model id
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.name, self.version)
    }
}

impl FromStr for ModelId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(ns), Some(name), Some(version), None)
                if !ns.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(ns, name, version))
            }
            _ => Err(Error::invalid_argument(format!(
                "Model id must have the form namespace:name:version, got '{s}'"
            ))),
        }
    }
}

/// A logical grouping of models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceRecord {
    /// Dot-separated namespace name
    pub name: String,
    /// Workspace holding the namespace's nodes
    pub workspace_id: String,
    /// Store revision of the last write
    #[serde(default)]
    pub revision: u64,
}

/// A model definition stored under a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Model identifier
    pub id: ModelId,
    /// Human readable name
    #[serde(default)]
    pub display_name: String,
    /// Free text description
    #[serde(default)]
    pub description: String,
    /// Node backing the model content
    pub node: NodePath,
    /// Models this one depends on
    #[serde(default)]
    pub references: Vec<ModelId>,
    /// Store revision of the last write
    #[serde(default)]
    pub revision: u64,
}

impl ModelRecord {
    /// Lowercased text the search index matches against
    pub fn search_document(&self) -> String {
        format!("{} {} {}", self.id, self.display_name, self.description).to_lowercase()
    }
}
