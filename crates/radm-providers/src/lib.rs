//! # Repository Admin - Provider Implementations
//!
//! Implementations of the ports defined in `radm-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Content Store | `ContentStoreProvider` | InMemory (seedable from JSON) |
//! | Search Index | `SearchIndexProvider` | InMemory (atomic snapshot swap) |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! radm-providers = { version = "0.1", default-features = false, features = ["store-memory"] }
//! ```

// Re-export radm-domain types commonly used with providers
pub use radm_domain::error::{Error, Result};
pub use radm_domain::ports::providers::{ContentStoreProvider, SearchIndexProvider};

/// Content store provider implementations
pub mod content_store;

/// Search index provider implementations
pub mod search_index;
