//! Tests for job side effect handlers.
//!
//! Covers:
//! - Manual refresh delivering a ticketed `JobsLoaded`
//! - Retry/cancel reporting exactly one `JobActionFinished`
//! - Domain and transport failures never triggering a refetch
//!
//! Does NOT cover:
//! - Applying results to app state (see retry_flow_tests.rs)

mod common;

use common::*;
use jobwatch_client::{ActionOutcome, JobAction};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_refresh_jobs_sends_ticketed_snapshot() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_list_jobs(&harness.mock_server).await;

    let actions = harness.handle_and_collect(Action::RefreshJobs, 2).await;

    assert_eq!(actions.len(), 1, "expected one JobsLoaded, got {actions:?}");
    match &actions[0] {
        Action::JobsLoaded { ticket, result } => {
            assert_eq!(*ticket, 1);
            let snapshot = result.as_ref().expect("snapshot loads");
            assert_eq!(snapshot.jobs.len(), 4);
        }
        other => panic!("expected JobsLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_jobs_failure_is_delivered_as_error() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&harness.mock_server)
        .await;

    let actions = harness.handle_and_collect(Action::RefreshJobs, 2).await;

    assert_eq!(actions.len(), 1);
    assert!(matches!(
        &actions[0],
        Action::JobsLoaded { ticket: 1, result: Err(_) }
    ));
}

#[tokio::test]
async fn test_manual_refreshes_take_increasing_tickets() {
    let mut harness = SideEffectsTestHarness::new().await;
    mount_list_jobs(&harness.mock_server).await;

    harness.dispatch(Action::RefreshJobs).await;
    harness.dispatch(Action::RefreshJobs).await;

    let mut tickets = Vec::new();
    for _ in 0..2 {
        match harness.next_action(2000).await {
            Action::JobsLoaded { ticket, .. } => tickets.push(ticket),
            other => panic!("expected JobsLoaded, got {other:?}"),
        }
    }
    tickets.sort_unstable();
    assert_eq!(tickets, vec![1, 2]);
    assert_eq!(harness.sequence.latest(), 2);
}

#[tokio::test]
async fn test_retry_success_reports_completed_only() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/jobs/j1/retry"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/action_success.json")),
        )
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(Action::RetryJob("j1".to_string()), 2)
        .await;

    assert_eq!(actions.len(), 1, "expected one action, got {actions:?}");
    match &actions[0] {
        Action::JobActionFinished {
            id,
            action,
            outcome,
        } => {
            assert_eq!(id, "j1");
            assert_eq!(*action, JobAction::Retry);
            assert_eq!(*outcome, ActionOutcome::Completed);
        }
        other => panic!("expected JobActionFinished, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retry_rejected_reports_domain_error_without_refresh() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/jobs/j1/retry"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/action_rejected.json")),
        )
        .mount(&harness.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(Action::RetryJob("j1".to_string()), 2)
        .await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::JobActionFinished { outcome, .. } => assert_eq!(
            *outcome,
            ActionOutcome::DomainError("Job is not in a retryable state".to_string())
        ),
        other => panic!("expected JobActionFinished, got {other:?}"),
    }
    assert!(
        !actions.iter().any(|a| matches!(a, Action::RefreshJobs)),
        "a rejected retry must not refetch"
    );
}

#[tokio::test]
async fn test_cancel_transport_failure_reports_transport_error() {
    let mut harness = SideEffectsTestHarness::new().await;

    Mock::given(method("POST"))
        .and(path("/api/admin/jobs/j2/cancel"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&harness.mock_server)
        .await;

    let actions = harness
        .handle_and_collect(Action::CancelJob("j2".to_string()), 2)
        .await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::JobActionFinished {
            id,
            action,
            outcome,
        } => {
            assert_eq!(id, "j2");
            assert_eq!(*action, JobAction::Cancel);
            assert!(matches!(outcome, ActionOutcome::TransportError(_)));
        }
        other => panic!("expected JobActionFinished, got {other:?}"),
    }
}

#[tokio::test]
async fn test_actions_without_side_effects_send_nothing() {
    let mut harness = SideEffectsTestHarness::new().await;

    let actions = harness.handle_and_collect(Action::ToggleHelp, 1).await;

    assert!(actions.is_empty());
    assert_eq!(harness.sequence.latest(), 0);
}
