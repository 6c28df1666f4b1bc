//! External Provider Ports
//!
//! Ports for the storage systems the admin service works against.
//!
//! ## Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | ContentStoreProvider | Namespace/model records and workspace node trees |
//! | SearchIndexProvider | Committed search index snapshots |

/// Content store port
pub mod content_store;
/// Search index port
pub mod search_index;

// Re-export provider ports for convenience
pub use content_store::ContentStoreProvider;
pub use search_index::SearchIndexProvider;
