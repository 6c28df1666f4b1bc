//! Value Objects
//!
//! Immutable types describing store addresses, snapshots and the results
//! of admin operations.

/// Diagnostic findings
pub mod diagnostic;
/// Node addressing and snapshots
pub mod node;
/// Reindex results and index state
pub mod reindex;

pub use diagnostic::{Diagnostic, Severity};
pub use node::{NodePath, NodeSnapshot, PropertyValue, is_path_within};
pub use reindex::{
    IndexSnapshot, IndexedModel, ReindexMode, ReindexResult, ReindexRun, ReindexStatus,
};
