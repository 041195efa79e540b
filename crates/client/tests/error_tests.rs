//! Error classification tests against real transport failures.

mod common;

use common::*;
use jobwatch_client::{ActionOutcome, ClientError, ErrorCategory};
use std::time::Duration;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_connection_refused_is_connect_error() {
    // Bind then drop a server so the port is closed.
    // (wiremock pools MockServers, so dropping one does not close its port.)
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = JobsClient::builder()
        .base_url(uri)
        .max_retries(0)
        .build()
        .unwrap();

    let err = client.list_jobs().await.unwrap_err();
    assert!(err.is_connect(), "expected connect error, got {err:?}");
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Transport);

    let outcome = client.retry_job("j1").await;
    assert!(matches!(outcome, ActionOutcome::TransportError(_)));
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("jobs/list_jobs.json"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let client = JobsClient::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(200))
        .max_retries(0)
        .build()
        .unwrap();

    let err = client.list_jobs().await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Timeout);
}

#[tokio::test]
async fn test_auth_errors_carry_request_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Request-Id", "req-42")
                .set_body_json(serde_json::json!({"success": false, "error": "Forbidden"})),
        )
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server).list_jobs().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status(), Some(403));
    let rendered = err.to_string();
    assert!(rendered.contains("Forbidden"));
    assert!(rendered.contains("[Request ID: req-42]"));
    assert!(matches!(err, ClientError::ApiError { .. }));
}

#[tokio::test]
async fn test_empty_error_body_uses_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = jobs_client(&mock_server).list_jobs().await.unwrap_err();
    match err {
        ClientError::ApiError { message, .. } => assert_eq!(message, "HTTP 404"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}
