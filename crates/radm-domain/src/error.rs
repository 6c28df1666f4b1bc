//! Error handling types

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the repository admin service
#[derive(Error, Debug)]
pub enum Error {
    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// The operation is blocked by the current state of the store
    #[error("Conflict: {message}")]
    Conflict {
        /// Description of what blocks the operation
        message: String,
    },

    /// An exclusive operation is already running
    #[error("Busy: {operation} is already in progress")]
    Busy {
        /// The operation holding the exclusive lock
        operation: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The content store cannot be reached
    #[error("Service unavailable: {message}")]
    ServiceUnavailable {
        /// Description of the outage
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A reindex run failed before it could commit
    #[error("Reindex failed: {message}")]
    ReindexFailed {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The operation exceeded its time budget
    #[error("Timed out: {operation} did not complete within {}ms", .after.as_millis())]
    TimedOut {
        /// The operation that timed out
        operation: String,
        /// The budget that was exceeded
        after: Duration,
    },

    /// Content store operation error
    #[error("Store error: {message}")]
    Store {
        /// Description of the store error
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a conflict error
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a busy error for an exclusive operation
    pub fn busy<S: Into<String>>(operation: S) -> Self {
        Self::Busy {
            operation: operation.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a store error
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create a timed out error
    pub fn timed_out<S: Into<String>>(operation: S, after: Duration) -> Self {
        Self::TimedOut {
            operation: operation.into(),
            after,
        }
    }
}

// Availability and reindex error creation methods
impl Error {
    /// Create a service unavailable error
    pub fn service_unavailable<S: Into<String>>(message: S) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
            source: None,
        }
    }

    /// Create a service unavailable error with source
    pub fn service_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a reindex failure
    pub fn reindex_failed<S: Into<String>>(message: S) -> Self {
        Self::ReindexFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a reindex failure with source
    pub fn reindex_failed_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::ReindexFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

impl Error {
    /// Machine-readable error code
    ///
    /// Stable across releases; clients branch on it instead of parsing messages.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Busy { .. } => "busy",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::ServiceUnavailable { .. } => "service_unavailable",
            Self::ReindexFailed { .. } => "reindex_failed",
            Self::TimedOut { .. } => "timed_out",
            Self::Store { .. }
            | Self::Configuration { .. }
            | Self::Io { .. }
            | Self::Json { .. }
            | Self::Internal { .. }
            | Self::Infrastructure { .. } => "internal_error",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
