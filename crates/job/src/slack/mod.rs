//! Messaging platform (Slack Web API) integration.
//!
//! This module provides:
//! - [`SlackClient`] for looking up users by email and writing away status
//! - Wire types for the lookup/profile/do-not-disturb endpoints
//!
//! All writes are idempotent: setting the same away status twice, or
//! clearing an already-clear status, leaves the platform in the same state.

mod client;
mod error;
mod types;

pub use client::SlackClient;
pub use error::SlackError;
pub use types::{ApiResponse, LookupUserResponse, StatusProfile};
