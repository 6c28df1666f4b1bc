//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `radm_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "radm.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "radm";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "RADM";

/// Separator between nested keys in environment variables (`RADM_SERVER__PORT`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Default mount point of the admin routes
pub const DEFAULT_BASE_PATH: &str = "/";

// ============================================================================
// OPERATION CONSTANTS
// ============================================================================

/// Deadline for diagnostics and node operations (30 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Deadline for a reindex run (5 minutes)
pub const DEFAULT_REINDEX_TIMEOUT_MS: u64 = 300_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "RADM_LOG";

/// Fallback file stem for the rolling log file
pub const LOG_FILE_STEM: &str = "radm";
