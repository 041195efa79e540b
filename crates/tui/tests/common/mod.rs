//! Common test utilities for TUI side effects tests.
//!
//! Shared harness for exercising the dashboard's async side effects against
//! a wiremock server that speaks the admin jobs API.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - Every harness gets its own mock server, action channel and task tracker
//! - The client never retries, so failures surface on the first attempt
//!
//! # What this does NOT handle
//! - Terminal setup (render tests use `TestBackend`)
//! - Configuration file I/O (use temp directories for that)

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub use jobwatch_client::JobsClient;
pub use jobwatch_client::testing::load_fixture;
pub use jobwatch_tui::action::Action;
pub use jobwatch_tui::polling::RequestSequence;
pub use jobwatch_tui::runtime::side_effects::{SharedClient, TaskTracker, handle_side_effects};
pub use tokio::sync::mpsc::{Receiver, Sender};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;

/// Mock server, action channel and client wired the way the runtime wires them.
pub struct SideEffectsTestHarness {
    pub mock_server: MockServer,
    pub action_rx: Receiver<Action>,
    pub action_tx: Sender<Action>,
    pub client: SharedClient,
    pub task_tracker: TaskTracker,
    pub sequence: RequestSequence,
}

impl SideEffectsTestHarness {
    pub async fn new() -> Self {
        let mock_server = MockServer::start().await;
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        let client = create_test_client(&mock_server.uri());

        Self {
            mock_server,
            action_rx,
            action_tx,
            client,
            task_tracker: TaskTracker::new(),
            sequence: RequestSequence::new(),
        }
    }

    /// Run `handle_side_effects` and fail if it blocks instead of spawning.
    pub async fn dispatch(&self, action: Action) {
        let handle_future = handle_side_effects(
            action,
            self.client.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
            self.sequence.clone(),
        );
        if tokio::time::timeout(Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!("handle_side_effects timed out - it may be awaiting network I/O instead of spawning");
        }
    }

    /// Dispatch an action and collect everything sent within `timeout_secs`.
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        self.dispatch(action).await;
        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + Duration::from_secs(timeout_secs);
        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(Duration::from_millis(100), self.action_rx.recv()).await {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => tokio::task::yield_now().await,
            }
        }
        actions
    }

    /// Wait for the next action sent by a spawned task.
    pub async fn next_action(&mut self, timeout_ms: u64) -> Action {
        match tokio::time::timeout(Duration::from_millis(timeout_ms), self.action_rx.recv()).await {
            Ok(Some(action)) => action,
            Ok(None) => panic!("action channel closed"),
            Err(_) => panic!("no action within {timeout_ms}ms"),
        }
    }
}

/// Client pointed at `base_url` with retries disabled.
pub fn create_test_client(base_url: &str) -> SharedClient {
    let client = JobsClient::builder()
        .base_url(base_url.to_string())
        .max_retries(0)
        .build()
        .expect("Failed to create test client");
    Arc::new(client)
}

/// Mount `GET /api/admin/jobs` returning the list fixture.
pub async fn mount_list_jobs(server: &MockServer) {
    use wiremock::matchers::{method, path};

    Mock::given(method("GET"))
        .and(path("/api/admin/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("jobs/list_jobs.json")))
        .mount(server)
        .await;
}

pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Flatten a rendered buffer into newline-separated rows.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }
    output
}
