//! Main application configuration

use super::{LoggingConfig, OperationsConfig, ServerConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Root of the `radm.toml` document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Operation deadlines
    #[serde(default)]
    pub operations: OperationsConfig,
    /// Content store backing
    #[serde(default)]
    pub store: StoreConfig,
}
