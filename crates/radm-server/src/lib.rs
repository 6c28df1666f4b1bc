//! # Repository Admin Server
//!
//! HTTP admin surface for a model repository: consistency diagnostics, node
//! inspection and deletion, and search index rebuilds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use radm_server::run;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     // Defaults, then ./radm.toml, then RADM_* environment variables
//!     run(None).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - Domain layer: entities, value objects and ports (radm-domain)
//! - Application layer: diagnostics, node inspection, reindex (radm-application)
//! - Providers: in-memory content store and search index (radm-providers)
//! - Infrastructure: configuration, logging, composition root (radm-infrastructure)
//! - Server: Rocket HTTP API (this crate)

pub mod admin;
pub mod init;

pub use init::run;
