//! Operations configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deadlines applied to admin operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationsConfig {
    /// Deadline for diagnostics and node requests in milliseconds
    pub request_timeout_ms: u64,

    /// Deadline for a reindex run in milliseconds
    pub reindex_timeout_ms: u64,
}

impl OperationsConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn reindex_timeout(&self) -> Duration {
        Duration::from_millis(self.reindex_timeout_ms)
    }
}

impl Default for OperationsConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            reindex_timeout_ms: DEFAULT_REINDEX_TIMEOUT_MS,
        }
    }
}
