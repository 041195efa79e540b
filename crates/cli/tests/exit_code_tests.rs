//! Integration tests for structured exit codes.
//!
//! These tests verify that jobwatch-cli returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{JOBS_PATH, jobwatch_cmd, jobwatch_cmd_for, load_fixture, mount_list_jobs};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    mount_list_jobs(&server).await;

    jobwatch_cmd_for(&server).arg("health").assert().code(0);
}

#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "success": false,
            "error": "Unauthorized"
        })))
        .mount(&server)
        .await;

    jobwatch_cmd_for(&server)
        .env("JOBWATCH_API_TOKEN", "invalid-token")
        .args(["jobs", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    jobwatch_cmd()
        .env("JOBWATCH_BASE_URL", "http://127.0.0.1:1")
        .args(["jobs", "list"])
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_unknown_job_returns_exit_code_4() {
    let server = MockServer::start().await;
    mount_list_jobs(&server).await;

    jobwatch_cmd_for(&server)
        .args(["jobs", "show", "j9"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("j9"));
}

#[tokio::test]
async fn test_rejected_retry_returns_exit_code_5() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/jobs/j1/retry"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/action_rejected.json")),
        )
        .mount(&server)
        .await;

    jobwatch_cmd_for(&server)
        .args(["jobs", "retry", "j1"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains(
            "Retry rejected for job j1: Job is not in a retryable state",
        ));
}

#[tokio::test]
async fn test_rejected_list_envelope_returns_exit_code_5() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_rejected.json")),
        )
        .mount(&server)
        .await;

    jobwatch_cmd_for(&server)
        .arg("health")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Admin access required"));
}

#[tokio::test]
async fn test_failed_cancel_transport_returns_exit_code_3() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/jobs/j2/cancel"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    jobwatch_cmd_for(&server)
        .args(["jobs", "cancel", "j2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Cancel failed for job j2"));
}

#[tokio::test]
async fn test_unavailable_list_returns_exit_code_8() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    jobwatch_cmd_for(&server)
        .args(["jobs", "list"])
        .assert()
        .code(8);
}
