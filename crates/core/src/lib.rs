//! Offsync Core - Shared types and the status decision engine.
//!
//! This crate provides the domain types used across all Offsync components:
//! - `job` - Fetch/decide/update pipeline over the two remote APIs
//! - `cli` - The scheduled entry point
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. The decision engine lives here so it can be tested without any
//! network plumbing.
//!
//! # Modules
//!
//! - [`types`] - Validated emails and time-off request records
//! - [`decision`] - Pure away/clear/no-action decision logic

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod decision;
pub mod types;

pub use decision::{Decision, decide, governing_decision};
pub use types::*;
