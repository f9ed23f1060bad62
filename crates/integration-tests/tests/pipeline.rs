//! Full pipeline runs against mock tracking-service and platform servers.

use chrono::NaiveDate;
use httpmock::prelude::*;
use serde_json::json;

use offsync_integration_tests::{TEST_WORKSPACE_ID, clockify_client, slack_client};
use offsync_job::{SyncError, run_sync};

fn reference_date() -> NaiveDate {
    "2024-06-12".parse().expect("valid date")
}

fn requests_path() -> String {
    format!("/workspaces/{TEST_WORKSPACE_ID}/time-off/requests")
}

fn wire_request(email: &str, start: &str, end: &str, policy: &str) -> serde_json::Value {
    json!({
        "userEmail": email,
        "timeOffPeriod": {
            "period": {
                "start": format!("{start}T00:00:00Z"),
                "end": format!("{end}T23:59:59Z")
            }
        },
        "status": { "statusType": "APPROVED" },
        "policyName": policy
    })
}

#[tokio::test]
async fn mixed_run_isolates_per_user_failures() {
    let clockify_server = MockServer::start();
    let slack_server = MockServer::start();

    // alice: on leave today / bob: returned today / carol: on leave but has
    // no platform account / dave: inverted window / erin: future booking.
    let _fetch = clockify_server.mock(|when, then| {
        when.method(POST).path(requests_path());
        then.status(200).json_body(json!({
            "requests": [
                wire_request("alice@x.com", "2024-06-10", "2024-06-14", "Vacations"),
                wire_request("bob@x.com", "2024-06-05", "2024-06-11", "Sick"),
                wire_request("carol@x.com", "2024-06-12", "2024-06-13", "Vacations"),
                wire_request("dave@x.com", "2024-06-20", "2024-06-12", "Vacations"),
                wire_request("erin@x.com", "2024-07-01", "2024-07-05", "Vacations"),
            ]
        }));
    });

    let lookup = |email: &str, response: serde_json::Value| {
        let email = email.to_string();
        slack_server.mock(move |when, then| {
            when.method(GET)
                .path("/users.lookupByEmail")
                .query_param("email", email.as_str());
            then.status(200).json_body(response.clone());
        })
    };

    let _alice = lookup("alice@x.com", json!({ "ok": true, "user": { "id": "U-ALICE" } }));
    let _bob = lookup("bob@x.com", json!({ "ok": true, "user": { "id": "U-BOB" } }));
    let _carol = lookup("carol@x.com", json!({ "ok": false, "error": "users_not_found" }));

    // alice's away status: "Vacations" preset, expiring at midnight of the
    // return day (2024-06-15), DND covering the remaining three days.
    let alice_status = slack_server.mock(|when, then| {
        when.method(POST).path("/users.profile.set").json_body(json!({
            "user": "U-ALICE",
            "profile": {
                "status_text": "On Holiday",
                "status_emoji": ":palm_tree:",
                "status_expiration": 1_718_409_600
            }
        }));
        then.status(200).json_body(json!({ "ok": true }));
    });
    let alice_dnd = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/dnd.setSnooze")
            .json_body(json!({ "user": "U-ALICE", "num_minutes": 4320 }));
        then.status(200).json_body(json!({ "ok": true }));
    });

    // bob returns today: status cleared, DND ended.
    let bob_clear = slack_server.mock(|when, then| {
        when.method(POST).path("/users.profile.set").json_body(json!({
            "user": "U-BOB",
            "profile": {
                "status_text": "",
                "status_emoji": "",
                "status_expiration": 0
            }
        }));
        then.status(200).json_body(json!({ "ok": true }));
    });
    let bob_dnd = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/dnd.endSnooze")
            .json_body(json!({ "user": "U-BOB" }));
        then.status(200).json_body(json!({ "ok": true }));
    });

    let clockify = clockify_client(&clockify_server.base_url());
    let slack = slack_client(&slack_server.base_url());

    let summary = run_sync(&clockify, &slack, reference_date(), false)
        .await
        .expect("run should succeed despite per-user failures");

    alice_status.assert();
    alice_dnd.assert();
    bob_clear.assert();
    bob_dnd.assert();

    assert_eq!(summary.set_away, 1);
    assert_eq!(summary.cleared, 1);
    assert_eq!(summary.unknown_users, 1);
    assert_eq!(summary.invalid_windows, 1);
    assert_eq!(summary.unchanged, 1);
    assert_eq!(summary.update_failures, 0);
    assert!(summary.has_warnings());
}

#[tokio::test]
async fn upstream_failure_aborts_before_any_platform_write() {
    let clockify_server = MockServer::start();
    let slack_server = MockServer::start();

    let _fetch = clockify_server.mock(|when, then| {
        when.method(POST).path(requests_path());
        then.status(500).body("boom");
    });

    let slack_any = slack_server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({ "ok": true }));
    });

    let clockify = clockify_client(&clockify_server.base_url());
    let slack = slack_client(&slack_server.base_url());

    let result = run_sync(&clockify, &slack, reference_date(), false).await;

    assert!(matches!(result, Err(SyncError::Upstream(_))));
    slack_any.assert_hits(0);
}

#[tokio::test]
async fn rejected_update_skips_user_but_run_succeeds() {
    let clockify_server = MockServer::start();
    let slack_server = MockServer::start();

    let _fetch = clockify_server.mock(|when, then| {
        when.method(POST).path(requests_path());
        then.status(200).json_body(json!({
            "requests": [
                wire_request("alice@x.com", "2024-06-10", "2024-06-14", "Vacations"),
                wire_request("bob@x.com", "2024-06-10", "2024-06-14", "Sick"),
            ]
        }));
    });

    let _lookups = slack_server.mock(|when, then| {
        when.method(GET)
            .path("/users.lookupByEmail")
            .query_param("email", "alice@x.com");
        then.status(200)
            .json_body(json!({ "ok": true, "user": { "id": "U-ALICE" } }));
    });
    let _bob_lookup = slack_server.mock(|when, then| {
        when.method(GET)
            .path("/users.lookupByEmail")
            .query_param("email", "bob@x.com");
        then.status(200)
            .json_body(json!({ "ok": true, "user": { "id": "U-BOB" } }));
    });

    // alice's write is rejected; bob's succeeds.
    let _alice_rejected = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/users.profile.set")
            .json_body_includes(r#"{"user": "U-ALICE"}"#);
        then.status(200)
            .json_body(json!({ "ok": false, "error": "ratelimited" }));
    });
    let bob_status = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/users.profile.set")
            .json_body_includes(r#"{"user": "U-BOB"}"#);
        then.status(200).json_body(json!({ "ok": true }));
    });
    let bob_dnd = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/dnd.setSnooze")
            .json_body_includes(r#"{"user": "U-BOB"}"#);
        then.status(200).json_body(json!({ "ok": true }));
    });

    let clockify = clockify_client(&clockify_server.base_url());
    let slack = slack_client(&slack_server.base_url());

    let summary = run_sync(&clockify, &slack, reference_date(), false)
        .await
        .expect("run should succeed");

    bob_status.assert();
    bob_dnd.assert();

    assert_eq!(summary.set_away, 1);
    assert_eq!(summary.update_failures, 1);
    assert!(summary.has_warnings());
}

#[tokio::test]
async fn overlapping_requests_use_longest_absence() {
    let clockify_server = MockServer::start();
    let slack_server = MockServer::start();

    // alice has a short leave that ended yesterday and a longer overlapping
    // one still active: the longer absence governs, so the status is set,
    // not cleared.
    let _fetch = clockify_server.mock(|when, then| {
        when.method(POST).path(requests_path());
        then.status(200).json_body(json!({
            "requests": [
                wire_request("alice@x.com", "2024-06-10", "2024-06-11", "Sick"),
                wire_request("alice@x.com", "2024-06-10", "2024-06-14", "Vacations"),
            ]
        }));
    });

    let _lookup = slack_server.mock(|when, then| {
        when.method(GET).path("/users.lookupByEmail");
        then.status(200)
            .json_body(json!({ "ok": true, "user": { "id": "U-ALICE" } }));
    });

    // The governing request is the vacation, so its preset is applied.
    let status = slack_server.mock(|when, then| {
        when.method(POST)
            .path("/users.profile.set")
            .json_body_includes(r#"{"profile": {"status_text": "On Holiday"}}"#);
        then.status(200).json_body(json!({ "ok": true }));
    });
    let _dnd = slack_server.mock(|when, then| {
        when.method(POST).path("/dnd.setSnooze");
        then.status(200).json_body(json!({ "ok": true }));
    });

    let clockify = clockify_client(&clockify_server.base_url());
    let slack = slack_client(&slack_server.base_url());

    let summary = run_sync(&clockify, &slack, reference_date(), false)
        .await
        .expect("run should succeed");

    status.assert();
    assert_eq!(summary.set_away, 1);
    assert_eq!(summary.cleared, 0);
}

#[tokio::test]
async fn dry_run_never_touches_the_platform() {
    let clockify_server = MockServer::start();
    let slack_server = MockServer::start();

    let _fetch = clockify_server.mock(|when, then| {
        when.method(POST).path(requests_path());
        then.status(200).json_body(json!({
            "requests": [
                wire_request("alice@x.com", "2024-06-10", "2024-06-14", "Vacations"),
            ]
        }));
    });

    let slack_any = slack_server.mock(|when, then| {
        when.any_request();
        then.status(200).json_body(json!({ "ok": true }));
    });

    let clockify = clockify_client(&clockify_server.base_url());
    let slack = slack_client(&slack_server.base_url());

    let summary = run_sync(&clockify, &slack, reference_date(), true)
        .await
        .expect("dry run should succeed");

    assert_eq!(summary.set_away, 1);
    slack_any.assert_hits(0);
}
