//! Time-off source errors.

use thiserror::Error;

/// Errors that can occur when fetching from the tracking service.
///
/// All variants are fatal for the run: without the full request list no
/// partial updates are attempted.
#[derive(Debug, Error)]
pub enum ClockifyError {
    /// HTTP request failed.
    #[error("time-off source request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success response.
    #[error("time-off source error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("time-off source parse error: {0}")]
    Parse(String),

    /// Client could not be constructed.
    #[error("time-off source configuration error: {0}")]
    Config(String),
}
