//! Content store configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Content store configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON fixture loaded into the in-memory store at startup
    pub seed_file: Option<PathBuf>,
}
