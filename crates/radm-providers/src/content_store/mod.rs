//! Content store provider implementations
//!
//! Implements the `ContentStoreProvider` port.

/// In-memory content store
#[cfg(feature = "store-memory")]
pub mod in_memory;
/// JSON fixtures for the in-memory store
#[cfg(feature = "store-memory")]
pub mod seed;

#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryContentStore;
#[cfg(feature = "store-memory")]
pub use seed::{NamespaceSeed, NodeSeed, StoreSeed, WorkspaceSeed};
