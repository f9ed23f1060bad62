//! Time-off source client for the Clockify-style tracking service.
//!
//! This module provides:
//! - [`ClockifyClient`] for fetching approved time-off requests
//! - Wire types mirroring the tracking service's response shape
//!
//! Fetching is fatal-on-failure: downstream steps need the full request
//! list, so the orchestrator aborts the run when this client errors.

mod client;
mod error;
mod types;

pub use client::{ClockifyClient, LOOKAHEAD_DAYS};
pub use error::ClockifyError;
pub use types::{TimeOffQuery, TimeOffRequestsPage, WireTimeOffRequest};
