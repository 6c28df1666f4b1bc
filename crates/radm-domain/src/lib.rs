//! # Domain Layer
//!
//! Core types and contracts of the repository admin service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Namespace and model records |
//! | [`value_objects`] | Node paths, snapshots, diagnostics, reindex results |
//! | [`ports`] | Content store and search index contracts |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Diagnostic codes and naming rules |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
