//! Admin data models
//!
//! Request and response models for the admin API, and the translation of
//! domain errors into HTTP responses.

use radm_domain::entities::ModelId;
use radm_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Structured error body shared by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine readable code, e.g. `not_found`
    pub error: String,
    /// Human readable description
    pub message: String,
}

/// Error half of every handler result
pub type ApiError = (Status, Json<ErrorResponse>);

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// HTTP status for a domain error
    pub fn status_for(err: &Error) -> Status {
        match err {
            Error::NotFound { .. } => Status::NotFound,
            Error::Conflict { .. } | Error::Busy { .. } => Status::Conflict,
            Error::InvalidArgument { .. } => Status::BadRequest,
            Error::ServiceUnavailable { .. } => Status::ServiceUnavailable,
            Error::TimedOut { .. } => Status::GatewayTimeout,
            _ => Status::InternalServerError,
        }
    }

    /// Status and body for a domain error
    pub fn from_error(err: &Error) -> ApiError {
        let status = Self::status_for(err);
        if status.code >= 500 {
            error!(code = err.code(), status = status.code, error = %err, "Admin request failed");
        } else {
            debug!(code = err.code(), status = status.code, error = %err, "Admin request rejected");
        }
        (status, Json(Self::new(err.code(), err.to_string())))
    }

    /// Body for statuses Rocket produces before a handler runs
    pub fn for_status(status: Status) -> ApiError {
        let code = match status.code {
            404 => "not_found",
            400 | 422 => "invalid_argument",
            _ => "internal_error",
        };
        let reason = status.reason().unwrap_or("Unknown status");
        (status, Json(Self::new(code, reason)))
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
    /// Seconds since the API was built
    pub uptime_seconds: u64,
    /// Whether a reindex run holds the lock
    pub reindexing: bool,
}

/// Successful node deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNodeResponse {
    /// Always `true`; failures use `ErrorResponse`
    pub success: bool,
    /// What was removed
    pub message: String,
    /// Number of removed nodes, the target included
    pub removed: usize,
}

/// Index search response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Expression as received
    pub query: String,
    /// Number of matches
    pub total: usize,
    /// Matching model ids ordered by id
    pub models: Vec<ModelId>,
}
