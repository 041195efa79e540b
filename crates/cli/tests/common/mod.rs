//! Shared test utilities for jobwatch-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the standard job-list fixture on a mock server.
//!
//! Invariants / Assumptions:
//! - `JOBWATCH_API_TOKEN` is set to "test-token" unless overridden.
//! - Retries are disabled so failing tests don't sit in backoff.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(unused_imports)]
pub use jobwatch_client::testing::load_fixture;

pub const JOBS_PATH: &str = "/api/admin/jobs";

/// Returns a hermetic `jobwatch-cli` command for integration testing.
pub fn jobwatch_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jobwatch-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("JOBWATCH_API_TOKEN", "test-token");
    cmd.env("JOBWATCH_MAX_RETRIES", "0");

    // Clear potential host leakage
    cmd.env_remove("JOBWATCH_BASE_URL")
        .env_remove("JOBWATCH_PROFILE")
        .env_remove("JOBWATCH_CONFIG_PATH")
        .env_remove("JOBWATCH_TIMEOUT")
        .env_remove("JOBWATCH_SKIP_VERIFY")
        .env_remove("JOBWATCH_POLL_INTERVAL")
        .env_remove("JOBWATCH_PAGE_SIZE");

    cmd
}

/// Hermetic command pointed at `server`.
#[allow(dead_code)]
pub fn jobwatch_cmd_for(server: &MockServer) -> Command {
    let mut cmd = jobwatch_cmd();
    cmd.env("JOBWATCH_BASE_URL", server.uri());
    cmd
}

/// Serve `fixtures/jobs/list_jobs.json` for the list endpoint.
#[allow(dead_code)]
pub async fn mount_list_jobs(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(JOBS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_jobs.json")))
        .mount(server)
        .await;
}
