//! Time-off request records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::email::Email;

/// Approval state of a time-off request, as reported by the tracking
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Approved,
    Pending,
    Rejected,
}

impl RequestStatus {
    /// Whether this request has been confirmed by an approver.
    #[must_use]
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// A time-off request fetched from the tracking service.
///
/// Immutable once fetched; a run sources these fresh and never persists
/// them. Only [`RequestStatus::Approved`] entries participate in status
/// decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffRequest {
    /// Email of the user who requested the leave.
    pub requester_email: Email,
    /// First day of the leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the leave (inclusive).
    pub end_date: NaiveDate,
    /// Approval state.
    pub status: RequestStatus,
    /// Leave policy name (e.g. "Vacations", "Sick"), when the source
    /// reports one. Drives the status text/emoji preset.
    pub policy: Option<String>,
}

impl TimeOffRequest {
    /// Whether the request's date window is well-formed.
    ///
    /// A request whose start date is after its end date is invalid and must
    /// be skipped with a warning, never applied.
    #[must_use]
    pub fn has_valid_window(&self) -> bool {
        self.start_date <= self.end_date
    }
}
