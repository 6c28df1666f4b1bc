//! Error extension utilities
//!
//! Turns foreign errors (figment, toml, io) into domain errors with a
//! message prefix naming the failed step.

use radm_domain::error::{Error, Result};
use std::fmt;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Domain error category produced by [`ErrorContext`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextKind {
    /// `Error::Infrastructure`
    Infrastructure,
    /// `Error::Io`
    Io,
    /// `Error::Configuration`
    Configuration,
}

impl ContextKind {
    fn wrap(self, message: String, source: BoxedSource) -> Error {
        let source = Some(source);
        match self {
            Self::Infrastructure => Error::Infrastructure { message, source },
            Self::Io => Error::Io { message, source },
            Self::Configuration => Error::Configuration { message, source },
        }
    }
}

/// Attach a step description to a foreign error
///
/// ```ignore
/// use radm_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, text).io_context("Failed to write config file")?;
/// ```
pub trait ErrorContext<T>: Sized {
    /// Wrap the error as `kind`, message `"{context}: {error}"`
    fn context_as<C: fmt::Display>(self, kind: ContextKind, context: C) -> Result<T>;

    fn context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Infrastructure, context)
    }

    fn io_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Io, context)
    }

    fn config_context<C: fmt::Display>(self, context: C) -> Result<T> {
        self.context_as(ContextKind::Configuration, context)
    }
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context_as<C: fmt::Display>(self, kind: ContextKind, context: C) -> Result<T> {
        self.map_err(|err| kind.wrap(format!("{context}: {err}"), Box::new(err)))
    }
}
