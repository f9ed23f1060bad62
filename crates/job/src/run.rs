//! The orchestrator: one best-effort pass over all users.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate, NaiveTime};
use offsync_core::{Decision, TimeOffRequest, governing_decision};
use tracing::{info, instrument, warn};

use crate::clockify::ClockifyClient;
use crate::error::SyncError;
use crate::presets::preset_for;
use crate::slack::{SlackClient, SlackError, StatusProfile};

/// Outcome counts for one sync run.
///
/// Exists only for the duration of the invocation; the scheduler's signal
/// is the process exit code, this is for the log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Users whose away status was set.
    pub set_away: usize,
    /// Users whose away status was cleared (return-to-work day).
    pub cleared: usize,
    /// Users with requests in the window but nothing to do today.
    pub unchanged: usize,
    /// Requests skipped because their window was inverted.
    pub invalid_windows: usize,
    /// Users skipped because no platform account matched their email.
    pub unknown_users: usize,
    /// Users whose platform update was rejected.
    pub update_failures: usize,
}

impl RunSummary {
    /// Whether any per-user problem occurred during the run.
    #[must_use]
    pub const fn has_warnings(&self) -> bool {
        self.invalid_windows > 0 || self.unknown_users > 0 || self.update_failures > 0
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "set_away={} cleared={} unchanged={} invalid_windows={} unknown_users={} update_failures={}",
            self.set_away,
            self.cleared,
            self.unchanged,
            self.invalid_windows,
            self.unknown_users,
            self.update_failures
        )
    }
}

/// Run one synchronization pass.
///
/// Fetches approved time-off requests, decides per user, and applies the
/// away status. A fetch failure aborts the run before any platform write;
/// per-user failures are logged and skipped. With `dry_run` set, decisions
/// are computed and logged but no platform write is performed.
///
/// # Errors
///
/// Returns [`SyncError::Upstream`] when the time-off source is unavailable.
#[instrument(skip(clockify, slack), fields(reference_date = %reference_date, dry_run))]
pub async fn run_sync(
    clockify: &ClockifyClient,
    slack: &SlackClient,
    reference_date: NaiveDate,
    dry_run: bool,
) -> Result<RunSummary, SyncError> {
    let requests = clockify.approved_requests(reference_date).await?;
    info!(count = requests.len(), "Fetched time-off requests");

    let mut summary = RunSummary::default();

    // BTreeMap keeps per-user processing order deterministic across runs.
    let mut by_user: BTreeMap<String, Vec<TimeOffRequest>> = BTreeMap::new();
    for request in requests {
        if !request.has_valid_window() {
            warn!(
                email = %request.requester_email,
                start_date = %request.start_date,
                end_date = %request.end_date,
                "Skipping request with inverted date window"
            );
            summary.invalid_windows += 1;
            continue;
        }
        by_user
            .entry(request.requester_email.to_string())
            .or_default()
            .push(request);
    }

    for (email, user_requests) in &by_user {
        let Some((decision, governing)) = governing_decision(reference_date, user_requests)
        else {
            summary.unchanged += 1;
            continue;
        };

        if dry_run {
            info!(
                email = %email,
                ?decision,
                start_date = %governing.start_date,
                end_date = %governing.end_date,
                "Dry run: skipping platform write"
            );
            match decision {
                Decision::SetAway => summary.set_away += 1,
                Decision::ClearAway => summary.cleared += 1,
                Decision::NoAction => summary.unchanged += 1,
            }
            continue;
        }

        let user_id = match slack.lookup_user_by_email(&governing.requester_email).await {
            Ok(id) => id,
            Err(SlackError::UserNotFound(_)) => {
                warn!(
                    email = %email,
                    start_date = %governing.start_date,
                    end_date = %governing.end_date,
                    "No platform account for email; skipping user"
                );
                summary.unknown_users += 1;
                continue;
            }
            Err(e) => {
                warn!(email = %email, error = %e, "User lookup failed; skipping user");
                summary.update_failures += 1;
                continue;
            }
        };

        let outcome = match decision {
            Decision::SetAway => apply_away(slack, &user_id, governing, reference_date).await,
            Decision::ClearAway => apply_clear(slack, &user_id).await,
            Decision::NoAction => Ok(()),
        };

        match outcome {
            Ok(()) => match decision {
                Decision::SetAway => {
                    info!(email = %email, end_date = %governing.end_date, "Away status set");
                    summary.set_away += 1;
                }
                Decision::ClearAway => {
                    info!(email = %email, "Away status cleared");
                    summary.cleared += 1;
                }
                Decision::NoAction => summary.unchanged += 1,
            },
            Err(e) => {
                warn!(
                    email = %email,
                    start_date = %governing.start_date,
                    end_date = %governing.end_date,
                    error = %e,
                    "Platform update rejected; skipping user"
                );
                summary.update_failures += 1;
            }
        }
    }

    info!(%summary, "Sync run complete");

    Ok(summary)
}

/// Set the away status and do-not-disturb for an active leave.
async fn apply_away(
    slack: &SlackClient,
    user_id: &str,
    request: &TimeOffRequest,
    reference_date: NaiveDate,
) -> Result<(), SlackError> {
    let preset = preset_for(request.policy.as_deref());
    let return_day = request
        .end_date
        .checked_add_days(Days::new(1))
        .unwrap_or(request.end_date);

    // Status expires at midnight of the return day; DND covers the same
    // span measured from the reference date.
    let expiration = return_day.and_time(NaiveTime::MIN).and_utc().timestamp();
    let snooze_minutes = (return_day - reference_date).num_days().max(0) * 24 * 60;

    slack
        .set_status(
            user_id,
            StatusProfile::away(preset.text, preset.emoji, expiration),
        )
        .await?;
    slack.set_dnd(user_id, snooze_minutes).await
}

/// Clear the away status and do-not-disturb on the return-to-work day.
async fn apply_clear(slack: &SlackClient, user_id: &str) -> Result<(), SlackError> {
    slack.clear_status(user_id).await?;
    slack.end_dnd(user_id).await
}
