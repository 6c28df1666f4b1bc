//! Node HTTP Handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/namespaces/diagnostics/modeshape/node/<ws>?path=` | GET | Node snapshot |
//! | `/namespaces/diagnostics/modeshape/node/<ws>?path=&recursive=` | DELETE | Remove a node |

use radm_domain::error::{Error, Result};
use radm_domain::value_objects::{NodePath, NodeSnapshot};
use radm_infrastructure::with_deadline;
use rocket::serde::json::Json;
use rocket::{State, delete, get};

use super::handlers::AdminState;
use super::models::{ApiError, DeleteNodeResponse, ErrorResponse};

fn node_path(workspace_id: &str, path: Option<&str>) -> Result<NodePath> {
    let path = path
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| Error::invalid_argument("Query parameter 'path' is required"))?;
    NodePath::new(workspace_id, path)
}

/// A missing flag is `false`; a bare `?recursive` is `true`
fn recursive_flag(recursive: Option<&str>) -> Result<bool> {
    let Some(value) = recursive else {
        return Ok(false);
    };
    match value.to_ascii_lowercase().as_str() {
        "" | "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err(Error::invalid_argument(format!(
            "Query parameter 'recursive' must be a boolean, got '{value}'"
        ))),
    }
}

/// Snapshot of a single node
#[get("/namespaces/diagnostics/modeshape/node/<workspace_id>?<path>")]
pub async fn get_node(
    state: &State<AdminState>,
    workspace_id: &str,
    path: Option<&str>,
) -> std::result::Result<Json<NodeSnapshot>, ApiError> {
    let target = node_path(workspace_id, path).map_err(|e| ErrorResponse::from_error(&e))?;
    with_deadline("get_node", state.request_timeout, state.inspector.get_node(&target))
        .await
        .map(Json)
        .map_err(|e| ErrorResponse::from_error(&e))
}

/// Remove a node, and its descendants when `recursive=true`
#[delete("/namespaces/diagnostics/modeshape/node/<workspace_id>?<path>&<recursive>")]
pub async fn delete_node(
    state: &State<AdminState>,
    workspace_id: &str,
    path: Option<&str>,
    recursive: Option<&str>,
) -> std::result::Result<Json<DeleteNodeResponse>, ApiError> {
    let target = node_path(workspace_id, path).map_err(|e| ErrorResponse::from_error(&e))?;
    let recursive = recursive_flag(recursive).map_err(|e| ErrorResponse::from_error(&e))?;

    let removed = with_deadline(
        "delete_node",
        state.request_timeout,
        state.inspector.delete_node(&target, recursive),
    )
    .await
    .map_err(|e| ErrorResponse::from_error(&e))?;

    Ok(Json(DeleteNodeResponse {
        success: true,
        message: format!("Deleted {removed} node(s) at {target}"),
        removed,
    }))
}
