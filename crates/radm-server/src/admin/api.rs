//! Admin API server
//!
//! HTTP server for the admin API.

use radm_domain::error::{Error, Result};
use radm_infrastructure::config::ServerConfig;
use rocket::config::{Config as RocketConfig, LogLevel};
use std::net::IpAddr;

use super::handlers::AdminState;
use super::routes::admin_rocket;

/// Admin API server configuration
#[derive(Debug, Clone)]
pub struct AdminApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Mount point of the admin routes
    pub base_path: String,
}

impl From<&ServerConfig> for AdminApiConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            host: server.host.clone(),
            port: server.port,
            base_path: server.base_path.clone(),
        }
    }
}

impl AdminApiConfig {
    /// Get the Rocket configuration
    pub fn rocket_config(&self) -> Result<RocketConfig> {
        let address: IpAddr = self.host.parse().map_err(|e| {
            Error::configuration_with_source(format!("Invalid bind address '{}'", self.host), e)
        })?;
        Ok(RocketConfig {
            address,
            port: self.port,
            log_level: LogLevel::Critical,
            ..RocketConfig::default()
        })
    }
}

/// Admin API server
pub struct AdminApi {
    config: AdminApiConfig,
    state: AdminState,
}

impl AdminApi {
    /// Create a new admin API server
    pub fn new(config: AdminApiConfig, state: AdminState) -> Self {
        Self { config, state }
    }

    /// Start the admin API server
    ///
    /// Runs until Rocket receives a shutdown signal (Ctrl+C or SIGTERM).
    pub async fn start(self) -> Result<()> {
        let rocket_config = self.config.rocket_config()?;

        tracing::info!(
            base_path = %self.config.base_path,
            "Admin API server listening on {}:{}",
            rocket_config.address,
            rocket_config.port
        );

        admin_rocket(self.state, &self.config.base_path)
            .configure(rocket_config)
            .launch()
            .await
            .map_err(|e| Error::infrastructure(format!("Rocket launch failed: {e}")))?;

        tracing::info!("Admin API server stopped");
        Ok(())
    }
}
