//! Run-level errors.

use thiserror::Error;

use crate::clockify::ClockifyError;
use crate::config::ConfigError;

/// Errors that abort an entire sync run.
///
/// Per-user failures (unknown email, rejected update) never surface here;
/// they are logged, counted in the run summary, and isolated from other
/// users.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The time-off source was unreachable or rejected the fetch. Fatal:
    /// without the full request list no updates are attempted.
    #[error(transparent)]
    Upstream(#[from] ClockifyError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
