//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Composition root wiring providers into services |
//! | [`config`] | TOML and environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context helpers converting foreign errors |
//! | [`logging`] | Structured logging with tracing |
//! | [`utils`] | Timing and deadline helpers |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use bootstrap::{AppContext, init_app};
pub use error_ext::ErrorContext;
pub use utils::{TimedOperation, with_deadline};
