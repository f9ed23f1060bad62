//! Pure status decision logic.
//!
//! Given a reference date ("today") and a user's approved time-off requests,
//! decide whether their messaging-platform status should be set, cleared, or
//! left alone. No I/O happens here; the job crate feeds these functions and
//! applies the results.

use chrono::{Days, NaiveDate};

use crate::types::TimeOffRequest;

/// What to do with a user's messaging-platform status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Today falls inside the leave window: set the away status.
    SetAway,
    /// Today is the first day after the leave ended: clear the away status.
    ClearAway,
    /// The request does not affect today.
    NoAction,
}

/// Decide what a single request implies for the reference date.
///
/// - [`Decision::SetAway`] when `today` is within `[start_date, end_date]`
/// - [`Decision::ClearAway`] when `today` is exactly `end_date + 1 day`
///   (the return-to-work day)
/// - [`Decision::NoAction`] otherwise
///
/// Requests that are not approved, or whose window is inverted, never
/// produce an action.
#[must_use]
pub fn decide(today: NaiveDate, request: &TimeOffRequest) -> Decision {
    if !request.status.is_approved() || !request.has_valid_window() {
        return Decision::NoAction;
    }

    if request.start_date <= today && today <= request.end_date {
        return Decision::SetAway;
    }

    if request.end_date.checked_add_days(Days::new(1)) == Some(today) {
        return Decision::ClearAway;
    }

    Decision::NoAction
}

/// Resolve the governing decision for a user with multiple requests.
///
/// Among the requests whose individual decision is not `NoAction`, the one
/// with the later end date governs: the longest continued absence wins. A
/// still-active leave therefore beats a return-to-work-day clear from a
/// shorter overlapping request, and a far-future booking (which decides
/// `NoAction` today) never masks a current absence.
///
/// Returns the governing decision together with the request that produced
/// it, or `None` when no request affects today.
#[must_use]
pub fn governing_decision<'a>(
    today: NaiveDate,
    requests: &'a [TimeOffRequest],
) -> Option<(Decision, &'a TimeOffRequest)> {
    requests
        .iter()
        .filter_map(|request| match decide(today, request) {
            Decision::NoAction => None,
            decision => Some((decision, request)),
        })
        .max_by_key(|(_, request)| request.end_date)
}
