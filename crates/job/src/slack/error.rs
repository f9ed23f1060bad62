//! Messaging platform errors.

use thiserror::Error;

/// Errors that can occur when interacting with the messaging platform.
///
/// All variants are per-user: the orchestrator logs them and continues with
/// the remaining users.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed.
    #[error("messaging platform request failed: {0}")]
    Request(String),

    /// Failed to parse response.
    #[error("messaging platform response error: {0}")]
    Response(String),

    /// Platform API returned an error.
    #[error("messaging platform API error: {0}")]
    Api(String),

    /// No platform account matches the email.
    #[error("no messaging platform user found for {0}")]
    UserNotFound(String),

    /// Client could not be constructed.
    #[error("messaging platform configuration error: {0}")]
    Config(String),
}
