//! Common test utilities for integration tests.
//!
//! Shared helpers and re-exports so every test file starts from the same
//! imports.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use jobwatch_client::testing::load_fixture;

#[allow(unused_imports)]
pub use jobwatch_client::{JobsClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server with retries disabled.
#[allow(dead_code)]
pub fn jobs_client(server: &MockServer) -> JobsClient {
    JobsClient::builder()
        .base_url(server.uri())
        .max_retries(0)
        .build()
        .expect("client builds")
}
