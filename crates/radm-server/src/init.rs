//! Server Initialization
//!
//! Loads configuration, installs logging, wires the application context and
//! serves the admin API until shutdown.

use std::path::Path;

use radm_domain::error::Result;
use radm_infrastructure::config::{AppConfig, ConfigLoader};
use radm_infrastructure::init_app;
use radm_infrastructure::logging::init_logging;
use tracing::info;

use crate::admin::{AdminApi, AdminApiConfig, AdminState};

/// Run the repository admin server
///
/// Returns once the HTTP server shuts down.
pub async fn run(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        request_timeout_ms = config.operations.request_timeout_ms,
        reindex_timeout_ms = config.operations.reindex_timeout_ms,
        "Starting repository admin server"
    );

    let context = init_app(config)?;
    let api = AdminApi::new(
        AdminApiConfig::from(&context.config.server),
        AdminState::from_context(&context),
    );
    api.start().await
}

fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
