//! Centralized constants for the jobwatch workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited or unavailable responses.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for the configurable retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Default base URL used when only a profile-less local setup is wanted.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// =============================================================================
// Dashboard Defaults
// =============================================================================

/// Default interval between job list polls in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Maximum allowed poll interval in seconds (1 hour).
pub const MAX_POLL_INTERVAL_SECS: u64 = 3600;

/// Default number of rows per table page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Largest page size accepted from configuration.
pub const MAX_PAGE_SIZE: usize = 500;

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds (drives durations and toasts).
pub const DEFAULT_UI_TICK_MS: u64 = 250;

// =============================================================================
// Health Thresholds
// =============================================================================

/// Pending job count at which queue depth turns to warning.
pub const DEFAULT_QUEUE_WARNING: u64 = 10;

/// Pending job count at which queue depth turns to critical.
pub const DEFAULT_QUEUE_CRITICAL: u64 = 50;

/// Failed job count at which the error rate turns to warning.
pub const DEFAULT_FAILED_WARNING: u64 = 5;

/// Failed job count at which the error rate turns to critical.
pub const DEFAULT_FAILED_CRITICAL: u64 = 25;

/// Maximum redirects followed by the HTTP client.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
