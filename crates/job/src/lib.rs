//! Offsync Job - the fetch/decide/update pipeline.
//!
//! One invocation of [`run::run_sync`] performs a single best-effort pass:
//!
//! 1. Fetch approved time-off requests from the tracking service
//! 2. Decide per user whether they are off, returning today, or unaffected
//! 3. Apply the decided away status to the messaging platform
//!
//! Failure to fetch aborts the run; per-user failures are logged and
//! isolated so the remaining users are still processed. There is no retry
//! loop - the next scheduled run is the retry mechanism.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clockify;
pub mod config;
pub mod error;
pub mod presets;
pub mod run;
pub mod slack;

pub use clockify::{ClockifyClient, ClockifyError};
pub use config::{ClockifyConfig, ConfigError, SlackConfig, SyncConfig};
pub use error::SyncError;
pub use run::{RunSummary, run_sync};
pub use slack::{SlackClient, SlackError};
