//! Wire types for the tracking service's time-off endpoint.
//!
//! The response nests the leave window two levels deep
//! (`timeOffPeriod.period.{start,end}`) and the approval state under
//! `status.statusType`; these types mirror that shape and convert into the
//! flat [`TimeOffRequest`] domain record.

use chrono::{DateTime, Utc};
use offsync_core::{Email, RequestStatus, TimeOffRequest};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Query payload for the time-off requests endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TimeOffQuery {
    /// Window start (inclusive), RFC 3339.
    pub start: DateTime<Utc>,
    /// Window end (inclusive), RFC 3339.
    pub end: DateTime<Utc>,
    /// Approval-status filter.
    pub statuses: Vec<String>,
    /// Empty list means all users.
    pub users: Vec<String>,
}

/// One page of time-off requests.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeOffRequestsPage {
    #[serde(default)]
    pub requests: Vec<WireTimeOffRequest>,
}

/// A time-off request as the tracking service reports it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTimeOffRequest {
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub time_off_period: Option<WireTimeOffPeriod>,
    #[serde(default)]
    pub status: Option<WireRequestStatus>,
    #[serde(default)]
    pub policy_name: Option<String>,
}

/// Wrapper around the leave window.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTimeOffPeriod {
    pub period: WirePeriod,
}

/// The leave window itself, as RFC 3339 instants.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePeriod {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Approval state wrapper.
///
/// Kept as a plain string so an unknown status type drops one entry
/// instead of failing the whole page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRequestStatus {
    pub status_type: String,
}

impl WireTimeOffRequest {
    /// Convert into the domain record.
    ///
    /// Entries missing an email, a window, or a status - or carrying an
    /// unparseable email - are logged and dropped rather than failing the
    /// whole fetch.
    #[must_use]
    pub fn into_domain(self) -> Option<TimeOffRequest> {
        let Some(raw_email) = self.user_email else {
            warn!("skipping time-off entry without a user email");
            return None;
        };

        let requester_email = match Email::parse(&raw_email) {
            Ok(email) => email,
            Err(e) => {
                warn!(email = %raw_email, error = %e, "skipping time-off entry with invalid email");
                return None;
            }
        };

        let Some(period) = self.time_off_period.map(|p| p.period) else {
            warn!(email = %requester_email, "skipping time-off entry without a leave window");
            return None;
        };

        let Some(raw_status) = self.status.map(|s| s.status_type) else {
            warn!(email = %requester_email, "skipping time-off entry without a status");
            return None;
        };

        let status = match raw_status.as_str() {
            "APPROVED" => RequestStatus::Approved,
            "PENDING" => RequestStatus::Pending,
            "REJECTED" => RequestStatus::Rejected,
            other => {
                warn!(email = %requester_email, status = %other, "skipping time-off entry with unknown status");
                return None;
            }
        };

        Some(TimeOffRequest {
            requester_email,
            start_date: period.start.date_naive(),
            end_date: period.end.date_naive(),
            status,
            policy: self.policy_name,
        })
    }
}
