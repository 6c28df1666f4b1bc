//! Admin Interface
//!
//! HTTP surface of the repository admin service. Handlers depend only on the
//! service interfaces in `radm_application::ports::services`.
//!
//! ## Endpoints
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/health` | GET | Health check with uptime |
//! | `/live` | GET | Liveness probe |
//! | `/namespaces/diagnostics` | GET | Consistency scan |
//! | `/namespaces/diagnostics/modeshape/node/<ws>` | GET | Node snapshot |
//! | `/namespaces/diagnostics/modeshape/node/<ws>` | DELETE | Delete a node |
//! | `/reindex` | POST | Incremental reindex |
//! | `/forcereindex` | POST | Full reindex |
//! | `/reindex/status` | GET | Reindex lock and last run |
//! | `/search` | GET | Query the committed index |

pub mod api;
pub mod handlers;
pub mod models;
pub mod node_handlers;
pub mod reindex_handlers;
pub mod routes;

// Re-export main types
pub use api::{AdminApi, AdminApiConfig};
pub use handlers::AdminState;
pub use models::{ErrorResponse, HealthResponse, SearchResponse};
pub use routes::admin_rocket;
