use crate::entities::{ModelRecord, NamespaceRecord};
use crate::error::Result;
use crate::value_objects::{NodePath, NodeSnapshot};
use async_trait::async_trait;

/// Content Store Access
///
/// Boundary to the hierarchical content store that holds namespace and model
/// records and the workspace node trees backing them. The admin service only
/// reads records and removes nodes; all other writes happen elsewhere.
///
/// Implementations report an unreachable store as
/// [`Error::ServiceUnavailable`](crate::error::Error::ServiceUnavailable).
///
/// # Example
///
/// ```ignore
/// use radm_domain::ports::providers::ContentStoreProvider;
///
/// store.ping().await?;
/// for namespace in store.list_namespaces().await? {
///     let models = store.list_models(&namespace.name).await?;
///     println!("{} holds {} models", namespace.name, models.len());
/// }
/// ```
#[async_trait]
pub trait ContentStoreProvider: Send + Sync {
    /// Verify the store is reachable
    async fn ping(&self) -> Result<()>;

    /// All namespace records, in store order
    async fn list_namespaces(&self) -> Result<Vec<NamespaceRecord>>;

    /// Models held by a namespace, in store order
    ///
    /// # Returns
    /// An empty list for a namespace without models
    async fn list_models(&self, namespace: &str) -> Result<Vec<ModelRecord>>;

    /// Whether a workspace exists
    async fn workspace_exists(&self, workspace_id: &str) -> Result<bool>;

    /// Read a node
    ///
    /// # Returns
    /// Ok(None) if no node exists at the path
    async fn get_node(&self, path: &NodePath) -> Result<Option<NodeSnapshot>>;

    /// Remove a node, and its descendants when `recursive` is set
    ///
    /// The check for blocking dependents and the removal happen as one step.
    ///
    /// # Returns
    /// Number of nodes removed. `NotFound` if the node is absent, `Conflict`
    /// if children (non-recursive) or inbound references block the removal.
    async fn delete_node(&self, path: &NodePath, recursive: bool) -> Result<usize>;

    /// Get the name/identifier of this store provider
    fn provider_name(&self) -> &str;
}
