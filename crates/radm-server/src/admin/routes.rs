//! Admin API routes
//!
//! Builds the Rocket instance serving the admin endpoints.

use rocket::http::Status;
use rocket::{Build, Request, Rocket, catch, catchers, routes};

use super::handlers::{AdminState, health_check, liveness_check, run_diagnostics};
use super::models::{ApiError, ErrorResponse};
use super::node_handlers::{delete_node, get_node};
use super::reindex_handlers::{force_reindex, reindex, reindex_status, search};

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> ApiError {
    ErrorResponse::for_status(status)
}

/// Create the admin API Rocket instance
///
/// Routes (relative to `base_path`):
/// - GET /health - Health check with uptime and reindex state
/// - GET /live - Liveness probe
/// - GET /namespaces/diagnostics - Consistency scan
/// - GET /namespaces/diagnostics/modeshape/node/<ws>?path= - Node snapshot
/// - DELETE /namespaces/diagnostics/modeshape/node/<ws>?path=&recursive= - Delete node
/// - POST /reindex - Incremental reindex
/// - POST /forcereindex - Full reindex
/// - GET /reindex/status - Reindex lock and last run
/// - GET /search?q= - Query the committed index
pub fn admin_rocket(state: AdminState, base_path: &str) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount(
            base_path,
            routes![
                health_check,
                liveness_check,
                run_diagnostics,
                get_node,
                delete_node,
                reindex,
                force_reindex,
                reindex_status,
                search,
            ],
        )
        .register("/", catchers![default_catcher])
}
