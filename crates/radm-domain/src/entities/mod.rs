//! Domain Entities
//!
//! Records owned by the content store: namespaces and the models they hold.

/// Namespace and model records
pub mod model;

pub use model::{ModelId, ModelRecord, NamespaceRecord};
