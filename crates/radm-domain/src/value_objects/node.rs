//! Content store node addressing and snapshots

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Path separator for hierarchical node keys
pub const PATH_SEPARATOR: char = '/';

/// Address of a single node: workspace id plus hierarchical path
///
/// Paths are normalized on construction: a leading `/` is required, a trailing
/// `/` is dropped and empty segments are rejected. The root node is `/`.
///
/// # Example
///
/// ```
/// use radm_domain::value_objects::NodePath;
///
/// let path = NodePath::new("ws1", "/com/acme/Vehicle/1.0.0/").unwrap();
/// assert_eq!(path.path(), "/com/acme/Vehicle/1.0.0");
/// assert_eq!(path.name(), Some("1.0.0"));
/// assert_eq!(path.parent().unwrap().path(), "/com/acme/Vehicle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNodePath")]
pub struct NodePath {
    workspace_id: String,
    path: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNodePath {
    workspace_id: String,
    path: String,
}

impl TryFrom<RawNodePath> for NodePath {
    type Error = Error;

    fn try_from(raw: RawNodePath) -> Result<Self> {
        Self::new(raw.workspace_id, raw.path)
    }
}

impl NodePath {
    /// Create a normalized node path
    pub fn new(workspace_id: impl Into<String>, path: impl AsRef<str>) -> Result<Self> {
        let workspace_id = workspace_id.into();
        if workspace_id.trim().is_empty() {
            return Err(Error::invalid_argument("Workspace id cannot be empty"));
        }
        let path = normalize_path(path.as_ref())?;
        Ok(Self { workspace_id, path })
    }

    /// Root node of a workspace
    pub fn root(workspace_id: impl Into<String>) -> Result<Self> {
        Self::new(workspace_id, "/")
    }

    /// Workspace the node lives in
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// Normalized hierarchical key
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is the workspace root
    pub fn is_root(&self) -> bool {
        self.path.len() == 1
    }

    /// Last path segment, `None` for the root
    pub fn name(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        self.path.rsplit(PATH_SEPARATOR).next()
    }

    /// Parent node path, `None` for the root
    pub fn parent(&self) -> Option<NodePath> {
        if self.is_root() {
            return None;
        }
        let cut = self.path.rfind(PATH_SEPARATOR)?;
        let parent = if cut == 0 { "/" } else { &self.path[..cut] };
        Some(Self {
            workspace_id: self.workspace_id.clone(),
            path: parent.to_string(),
        })
    }

    /// Child node path with the given name
    pub fn child(&self, name: &str) -> Result<NodePath> {
        if name.is_empty() || name.contains(PATH_SEPARATOR) {
            return Err(Error::invalid_argument(format!(
                "Invalid child node name: '{name}'"
            )));
        }
        let path = if self.is_root() {
            format!("/{name}")
        } else {
            format!("{}/{name}", self.path)
        };
        Ok(Self {
            workspace_id: self.workspace_id.clone(),
            path,
        })
    }

    /// Whether `self` equals `ancestor` or lies beneath it in the same workspace
    pub fn is_within(&self, ancestor: &NodePath) -> bool {
        if self.workspace_id != ancestor.workspace_id {
            return false;
        }
        is_path_within(&self.path, &ancestor.path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.workspace_id, self.path)
    }
}

/// Whether the normalized `path` equals `ancestor` or is one of its descendants
pub fn is_path_within(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return true;
    }
    path == ancestor
        || (path.starts_with(ancestor)
            && path.as_bytes().get(ancestor.len()) == Some(&(PATH_SEPARATOR as u8)))
}

fn normalize_path(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if !trimmed.starts_with(PATH_SEPARATOR) {
        return Err(Error::invalid_argument(format!(
            "Node path must start with '/': '{raw}'"
        )));
    }
    let body = trimmed.trim_end_matches(PATH_SEPARATOR);
    if body.is_empty() {
        return Ok("/".to_string());
    }
    if body[1..].split(PATH_SEPARATOR).any(str::is_empty) {
        return Err(Error::invalid_argument(format!(
            "Node path contains an empty segment: '{raw}'"
        )));
    }
    Ok(body.to_string())
}

/// Typed node property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum PropertyValue {
    /// Plain text
    String(String),
    /// Signed integer
    Integer(i64),
    /// Boolean flag
    Boolean(bool),
    /// Path of another node in the same workspace
    Reference(String),
}

impl PropertyValue {
    /// Referenced path if this is a reference property
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            Self::Reference(path) => Some(path),
            _ => None,
        }
    }
}

/// Point-in-time projection of a node
///
/// Stale as soon as the store is mutated; never cached across a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSnapshot {
    /// Address of the node
    pub path: NodePath,
    /// Properties keyed by name
    pub properties: BTreeMap<String, PropertyValue>,
    /// Child names in insertion order
    pub children: Vec<String>,
}
