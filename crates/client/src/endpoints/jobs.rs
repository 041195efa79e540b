//! Admin job endpoints.
//!
//! - `GET  /api/admin/jobs` returns the complete job set and stats.
//! - `POST /api/admin/jobs/{id}/retry` and `/cancel` take no body.

use reqwest::Client;

use crate::endpoints::{
    ResendPolicy, encode_path_segment, parse_json_body, send_request_with_retry, send_with_policy,
    with_auth,
};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApiEnvelope, JobAction, JobsSnapshot};

const JOBS_PATH: &str = "/api/admin/jobs";

/// Fetch the full job list and aggregate stats.
///
/// A `success: false` envelope becomes [`ClientError::Rejected`]; a
/// successful envelope without `data` is an invalid response.
pub async fn list_jobs(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<JobsSnapshot> {
    let url = format!("{}{}", base_url, JOBS_PATH);

    let builder = with_auth(client.get(&url), auth_token);
    let response = send_request_with_retry(builder, max_retries, JOBS_PATH, "GET", metrics).await?;

    let envelope: ApiEnvelope<JobsSnapshot> =
        parse_json_body(response, JOBS_PATH, "JobsSnapshot", metrics).await?;

    if !envelope.success {
        return Err(ClientError::Rejected {
            message: envelope.failure_message(),
        });
    }

    envelope
        .data
        .ok_or_else(|| ClientError::InvalidResponse("missing 'data' in jobs response".into()))
}

/// Send a retry or cancel command for one job.
///
/// Returns the decoded envelope; interpreting `success` is up to the caller.
/// The POST is re-sent only on 429, so one call applies the command at most
/// once even when a gateway times out after forwarding it.
pub async fn send_job_action(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    job_id: &str,
    action: JobAction,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiEnvelope<serde_json::Value>> {
    let url = format!(
        "{}{}/{}/{}",
        base_url,
        JOBS_PATH,
        encode_path_segment(job_id),
        action.path_suffix()
    );
    let endpoint = action.endpoint_template();

    let builder = with_auth(client.post(&url), auth_token);
    let response = send_with_policy(
        builder,
        ResendPolicy::ThrottledOnly,
        max_retries,
        endpoint,
        "POST",
        metrics,
    )
    .await?;

    parse_json_body(response, endpoint, "ApiEnvelope", metrics).await
}

/// `POST /api/admin/jobs/{id}/retry`.
pub async fn retry_job(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    job_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiEnvelope<serde_json::Value>> {
    send_job_action(
        client,
        base_url,
        auth_token,
        job_id,
        JobAction::Retry,
        max_retries,
        metrics,
    )
    .await
}

/// `POST /api/admin/jobs/{id}/cancel`.
pub async fn cancel_job(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    job_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<ApiEnvelope<serde_json::Value>> {
    send_job_action(
        client,
        base_url,
        auth_token,
        job_id,
        JobAction::Cancel,
        max_retries,
        metrics,
    )
    .await
}
