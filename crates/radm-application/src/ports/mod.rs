//! Application Port Interfaces
//!
//! - **services.rs** - Admin service interfaces (diagnostics, node inspection, reindex)
//!
//! Storage ports live in `radm_domain::ports`.

/// Application service interfaces
pub mod services;

pub use services::{DiagnosticsServiceInterface, NodeInspectorInterface, ReindexServiceInterface};
