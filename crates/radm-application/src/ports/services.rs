//! Application Service Port Interfaces
//!
//! Contracts the admin use cases implement. The server layer depends only on
//! these traits, never on the concrete services.

use async_trait::async_trait;
use radm_domain::entities::ModelId;
use radm_domain::error::Result;
use radm_domain::value_objects::{Diagnostic, NodePath, NodeSnapshot, ReindexResult, ReindexStatus};

// ============================================================================
// Diagnostics Service Interface
// ============================================================================

/// Consistency scan over namespace and model records
#[async_trait]
pub trait DiagnosticsServiceInterface: Send + Sync {
    /// Run every check and return the findings in scan order
    ///
    /// Fails with `ServiceUnavailable` only when the store cannot be reached;
    /// a check that cannot be evaluated becomes an ERROR finding.
    async fn run_diagnostics(&self) -> Result<Vec<Diagnostic>>;
}

// ============================================================================
// Node Inspector Interface
// ============================================================================

/// Read and remove single content store nodes
#[async_trait]
pub trait NodeInspectorInterface: Send + Sync {
    /// Snapshot of the node at `path`, `NotFound` if absent
    async fn get_node(&self, path: &NodePath) -> Result<NodeSnapshot>;

    /// Remove the node at `path`
    ///
    /// Descendants are only removed when `recursive` is set. Returns the
    /// number of removed nodes.
    async fn delete_node(&self, path: &NodePath, recursive: bool) -> Result<usize>;
}

// ============================================================================
// Reindex Service Interface
// ============================================================================

/// Rebuild and query the search index
#[async_trait]
pub trait ReindexServiceInterface: Send + Sync {
    /// Run a reindex; `force` ignores change tracking
    ///
    /// Fails immediately with `Busy` while another run holds the lock.
    async fn reindex(&self, force: bool) -> Result<ReindexResult>;

    /// Whether a run is active and what the last successful run produced
    async fn status(&self) -> ReindexStatus;

    /// Models in the committed index matching `expression`
    fn search(&self, expression: &str) -> Vec<ModelId>;
}
