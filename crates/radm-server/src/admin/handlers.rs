//! Admin request handlers
//!
//! Shared handler state plus the health and diagnostics endpoints. Node and
//! reindex endpoints live in `node_handlers` and `reindex_handlers`.

use radm_application::ports::services::{
    DiagnosticsServiceInterface, NodeInspectorInterface, ReindexServiceInterface,
};
use radm_domain::value_objects::Diagnostic;
use radm_infrastructure::{AppContext, TimedOperation, with_deadline};
use rocket::serde::json::Json;
use rocket::{State, get};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

use super::models::{ApiError, ErrorResponse, HealthResponse};

/// Admin API state shared across handlers
#[derive(Clone)]
pub struct AdminState {
    /// Consistency scan
    pub diagnostics: Arc<dyn DiagnosticsServiceInterface>,
    /// Node reads and deletes
    pub inspector: Arc<dyn NodeInspectorInterface>,
    /// Index rebuilds and search
    pub reindex: Arc<dyn ReindexServiceInterface>,
    /// Deadline for diagnostics and node requests
    pub request_timeout: Duration,
    /// Deadline for reindex runs
    pub reindex_timeout: Duration,
    /// Started when the state was built
    pub started: TimedOperation,
}

impl AdminState {
    /// Build handler state from the wired application context
    pub fn from_context(context: &AppContext) -> Self {
        Self {
            diagnostics: context.diagnostics(),
            inspector: context.inspector(),
            reindex: context.reindex(),
            request_timeout: context.config.operations.request_timeout(),
            reindex_timeout: context.config.operations.reindex_timeout(),
            started: TimedOperation::start(),
        }
    }
}

/// Health check endpoint
#[get("/health")]
pub async fn health_check(state: &State<AdminState>) -> Json<HealthResponse> {
    let status = state.reindex.status().await;
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.started.elapsed_secs(),
        reindexing: status.running,
    })
}

/// Liveness check endpoint (for k8s/docker health checks)
#[get("/live")]
pub fn liveness_check() -> Json<Value> {
    Json(json!({ "alive": true }))
}

/// Run the namespace/model consistency scan
///
/// GET /namespaces/diagnostics
#[get("/namespaces/diagnostics")]
pub async fn run_diagnostics(
    state: &State<AdminState>,
) -> Result<Json<Vec<Diagnostic>>, ApiError> {
    with_deadline(
        "diagnostics",
        state.request_timeout,
        state.diagnostics.run_diagnostics(),
    )
    .await
    .map(Json)
    .map_err(|e| ErrorResponse::from_error(&e))
}
