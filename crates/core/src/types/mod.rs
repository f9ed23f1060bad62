//! Core types for Offsync.
//!
//! This module provides type-safe wrappers for the domain concepts shared by
//! the pipeline: validated email addresses and time-off request records.

pub mod email;
pub mod request;

pub use email::{Email, EmailError};
pub use request::{RequestStatus, TimeOffRequest};
