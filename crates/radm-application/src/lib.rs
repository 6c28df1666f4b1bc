//! Application Layer - Repository Admin Service
//!
//! Use cases of the admin service, written against the ports in
//! `radm-domain` so any store or index implementation can back them.
//!
//! ## Use Cases
//!
//! - Diagnostics scan over namespace/model records
//! - Node inspection and deletion
//! - Incremental and forced reindexing, index search
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `radm-domain`: For entities, value objects and ports
//! - Pure Rust libraries for async, logging, etc.

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
