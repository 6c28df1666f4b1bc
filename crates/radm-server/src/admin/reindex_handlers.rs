//! Reindex HTTP Handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/reindex` | POST | Incremental reindex |
//! | `/forcereindex` | POST | Full reindex |
//! | `/reindex/status` | GET | Lock state and last run |
//! | `/search?q=` | GET | Query the committed index |

use radm_domain::constants::OPERATION_REINDEX;
use radm_domain::value_objects::{ReindexResult, ReindexStatus};
use radm_infrastructure::with_deadline;
use rocket::serde::json::Json;
use rocket::{State, get, post};

use super::handlers::AdminState;
use super::models::{ApiError, ErrorResponse, SearchResponse};

async fn run_reindex(state: &AdminState, force: bool) -> Result<Json<ReindexResult>, ApiError> {
    // Dropping the run at the deadline releases the lock without committing
    with_deadline(
        OPERATION_REINDEX,
        state.reindex_timeout,
        state.reindex.reindex(force),
    )
    .await
    .map(Json)
    .map_err(|e| ErrorResponse::from_error(&e))
}

/// Incremental reindex
#[post("/reindex")]
pub async fn reindex(state: &State<AdminState>) -> Result<Json<ReindexResult>, ApiError> {
    run_reindex(state, false).await
}

/// Reindex every record regardless of change tracking
#[post("/forcereindex")]
pub async fn force_reindex(state: &State<AdminState>) -> Result<Json<ReindexResult>, ApiError> {
    run_reindex(state, true).await
}

#[get("/reindex/status")]
pub async fn reindex_status(state: &State<AdminState>) -> Json<ReindexStatus> {
    Json(state.reindex.status().await)
}

/// Case-insensitive substring search; an empty `q` lists every indexed model
#[get("/search?<q>")]
pub fn search(state: &State<AdminState>, q: Option<&str>) -> Json<SearchResponse> {
    let query = q.unwrap_or_default().to_string();
    let models = state.reindex.search(&query);
    Json(SearchResponse {
        total: models.len(),
        query,
        models,
    })
}
