//! REST API endpoint implementations.
//!
//! Endpoints are free functions over a shared `reqwest::Client` so the
//! high-level [`crate::JobsClient`] and tests can call them directly.

mod jobs;
mod parsing;
mod request;
pub mod url_encoding;

pub use jobs::{cancel_job, list_jobs, retry_job, send_job_action};
pub use parsing::parse_json_body;
pub use request::{ResendPolicy, send_request_with_retry, send_with_policy};
pub use url_encoding::encode_path_segment;

/// Attach the bearer token when one is configured.
pub(crate) fn with_auth(
    builder: reqwest::RequestBuilder,
    auth_token: Option<&str>,
) -> reqwest::RequestBuilder {
    match auth_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}
