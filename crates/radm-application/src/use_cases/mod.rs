//! Use Case Implementations
//!
//! Application services implementing the interfaces in `crate::ports::services`.

/// Consistency scan over namespace and model records
pub mod diagnostics_service;
/// Single node inspection and deletion
pub mod node_inspector;
/// Search index rebuilds
pub mod reindex_service;

pub use diagnostics_service::DiagnosticsServiceImpl;
pub use node_inspector::NodeInspectorImpl;
pub use reindex_service::ReindexServiceImpl;
