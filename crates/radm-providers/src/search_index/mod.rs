//! Search index provider implementations
//!
//! Implements the `SearchIndexProvider` port.

/// In-memory search index
#[cfg(feature = "index-memory")]
pub mod in_memory;

#[cfg(feature = "index-memory")]
pub use in_memory::InMemorySearchIndex;
