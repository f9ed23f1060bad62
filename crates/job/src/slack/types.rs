//! Wire types for the messaging platform endpoints.
//!
//! The platform wraps every response in an `{ "ok": bool, "error": ... }`
//! envelope; HTTP status alone is not enough to detect failure.

use serde::{Deserialize, Serialize};

/// Generic response envelope for write endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Error code if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from the lookup-user-by-email endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupUserResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// The matched user, when ok.
    #[serde(default)]
    pub user: Option<LookupUser>,
    /// Error code if not ok (`users_not_found` for unknown emails).
    #[serde(default)]
    pub error: Option<String>,
}

/// The user object inside a lookup response.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupUser {
    /// Platform-internal user identifier.
    pub id: String,
}

/// Profile payload for the set-status endpoint.
///
/// An empty text/emoji with zero expiration clears the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusProfile {
    pub status_text: String,
    pub status_emoji: String,
    /// Unix timestamp after which the platform drops the status; 0 means
    /// no expiration.
    pub status_expiration: i64,
}

impl StatusProfile {
    /// An away status with the given text/emoji, expiring at `expiration`.
    #[must_use]
    pub fn away(text: impl Into<String>, emoji: impl Into<String>, expiration: i64) -> Self {
        Self {
            status_text: text.into(),
            status_emoji: emoji.into(),
            status_expiration: expiration,
        }
    }

    /// The empty profile that clears any existing status.
    #[must_use]
    pub fn cleared() -> Self {
        Self {
            status_text: String::new(),
            status_emoji: String::new(),
            status_expiration: 0,
        }
    }
}

/// Request body for the set-status endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SetProfileRequest {
    /// Platform user whose profile is updated.
    pub user: String,
    pub profile: StatusProfile,
}

/// Request body for the do-not-disturb snooze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SetSnoozeRequest {
    /// Platform user whose snooze is set.
    pub user: String,
    /// Snooze duration in minutes.
    pub num_minutes: i64,
}

/// Request body for ending do-not-disturb.
#[derive(Debug, Clone, Serialize)]
pub struct EndSnoozeRequest {
    /// Platform user whose snooze is ended.
    pub user: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cleared_profile_is_empty() {
        let profile = StatusProfile::cleared();
        assert!(profile.status_text.is_empty());
        assert!(profile.status_emoji.is_empty());
        assert_eq!(profile.status_expiration, 0);
    }

    #[test]
    fn test_away_profile_serializes_wire_fields() {
        let profile = StatusProfile::away("On Holiday", ":palm_tree:", 1_718_409_599);
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            json!({
                "status_text": "On Holiday",
                "status_emoji": ":palm_tree:",
                "status_expiration": 1_718_409_599
            })
        );
    }

    #[test]
    fn test_lookup_response_not_found() {
        let response: LookupUserResponse =
            serde_json::from_value(json!({ "ok": false, "error": "users_not_found" })).unwrap();
        assert!(!response.ok);
        assert_eq!(response.error.as_deref(), Some("users_not_found"));
        assert!(response.user.is_none());
    }
}
