//! Dashboard settings: poll cadence, paging, and health thresholds.
//!
//! Invariants:
//! - `poll_interval_secs` and `page_size` are non-zero once validated by the loader.
//! - Every configured critical threshold is strictly above its warning threshold.

use crate::constants::{
    DEFAULT_FAILED_CRITICAL, DEFAULT_FAILED_WARNING, DEFAULT_PAGE_SIZE,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_QUEUE_CRITICAL, DEFAULT_QUEUE_WARNING,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thresholds used to band aggregate job counts into healthy/warning/critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthThresholds {
    /// Pending count at which queue depth becomes a warning.
    pub queue_warning: u64,
    /// Pending count at which queue depth becomes critical.
    pub queue_critical: u64,
    /// Failed count at which the error rate becomes a warning.
    pub failed_warning: u64,
    /// Failed count at which the error rate becomes critical. `None` disables the tier.
    pub failed_critical: Option<u64>,
    /// Processing count at which processing becomes a warning. `None` keeps it healthy.
    pub processing_warning: Option<u64>,
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            queue_warning: DEFAULT_QUEUE_WARNING,
            queue_critical: DEFAULT_QUEUE_CRITICAL,
            failed_warning: DEFAULT_FAILED_WARNING,
            failed_critical: Some(DEFAULT_FAILED_CRITICAL),
            processing_warning: None,
        }
    }
}

impl HealthThresholds {
    /// Check that warning tiers sit below their critical tiers.
    pub fn validate(&self) -> Result<(), String> {
        if self.queue_warning >= self.queue_critical {
            return Err(format!(
                "queue_warning ({}) must be less than queue_critical ({})",
                self.queue_warning, self.queue_critical
            ));
        }
        if let Some(critical) = self.failed_critical
            && self.failed_warning >= critical
        {
            return Err(format!(
                "failed_warning ({}) must be less than failed_critical ({})",
                self.failed_warning, critical
            ));
        }
        Ok(())
    }
}

/// Dashboard behaviour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between automatic job list polls.
    pub poll_interval_secs: u64,
    /// Rows per table page.
    pub page_size: usize,
    /// Whether auto-refresh starts enabled.
    pub auto_refresh: bool,
    /// Health summary thresholds.
    pub thresholds: HealthThresholds,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            auto_refresh: true,
            thresholds: HealthThresholds::default(),
        }
    }
}

impl DashboardConfig {
    /// Poll interval as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}
