//! Timing instrumentation helpers
//!
//! Elapsed-time tracking and deadline enforcement for admin operations.

use radm_domain::error::{Error, Result};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::warn;

/// Timing instrumentation helper - tracks operation elapsed time
///
/// # Example
///
/// ```ignore
/// use radm_infrastructure::utils::TimedOperation;
///
/// let timer = TimedOperation::start();
/// // Perform operation
/// let elapsed = timer.elapsed_ms();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimedOperation {
    start: Instant,
}

impl TimedOperation {
    /// Start a new timed operation
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Get elapsed time in whole seconds
    pub fn elapsed_secs(&self) -> u64 {
        self.start.elapsed().as_secs()
    }

    /// Get elapsed time as Duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Await `future`, failing with `TimedOut` once `limit` passes
///
/// The future is dropped at the deadline, which abandons whatever work it had
/// not yet committed.
pub async fn with_deadline<T, F>(operation: &str, limit: Duration, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(outcome) => outcome,
        Err(_) => {
            warn!(
                operation,
                limit_ms = limit.as_millis() as u64,
                "Operation exceeded its deadline"
            );
            Err(Error::timed_out(operation, limit))
        }
    }
}
