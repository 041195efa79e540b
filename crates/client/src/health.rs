//! Health bands derived from aggregate job counts.
//!
//! Shared by the dashboard header and `jobwatch-cli health`.
//!
//! Invariants:
//! - Bands are ordered `Healthy < Warning < Critical`; `overall()` is the max.
//! - With default thresholds: pending <10 healthy, 10–49 warning, ≥50 critical;
//!   failed <5 healthy, 5–24 warning, ≥25 critical; processing always healthy.

use jobwatch_config::HealthThresholds;
use std::fmt;

use crate::models::JobsStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HealthBand {
    Healthy,
    Warning,
    Critical,
}

impl HealthBand {
    pub const fn as_str(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Warning => "warning",
            HealthBand::Critical => "critical",
        }
    }

    pub const fn glyph(&self) -> char {
        match self {
            HealthBand::Healthy => '●',
            HealthBand::Warning => '▲',
            HealthBand::Critical => '✗',
        }
    }

    fn from_count(count: u64, warning: Option<u64>, critical: Option<u64>) -> Self {
        if critical.is_some_and(|c| count >= c) {
            HealthBand::Critical
        } else if warning.is_some_and(|w| count >= w) {
            HealthBand::Warning
        } else {
            HealthBand::Healthy
        }
    }
}

impl fmt::Display for HealthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banded view of one `JobsStats`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthSummary {
    pub queue_depth: HealthBand,
    pub error_rate: HealthBand,
    pub processing: HealthBand,
    pub pending: u64,
    pub processing_count: u64,
    pub completed: u64,
    pub failed: u64,
    pub avg_processing_secs: Option<f64>,
}

impl HealthSummary {
    pub fn evaluate(stats: &JobsStats, thresholds: &HealthThresholds) -> Self {
        Self {
            queue_depth: HealthBand::from_count(
                stats.pending,
                Some(thresholds.queue_warning),
                Some(thresholds.queue_critical),
            ),
            error_rate: HealthBand::from_count(
                stats.failed,
                Some(thresholds.failed_warning),
                thresholds.failed_critical,
            ),
            processing: HealthBand::from_count(
                stats.processing,
                thresholds.processing_warning,
                None,
            ),
            pending: stats.pending,
            processing_count: stats.processing,
            completed: stats.completed,
            failed: stats.failed,
            avg_processing_secs: stats.avg_processing_time,
        }
    }

    /// Worst of the three bands.
    pub fn overall(&self) -> HealthBand {
        self.queue_depth.max(self.error_rate).max(self.processing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(pending: u64, processing: u64, completed: u64, failed: u64) -> JobsStats {
        JobsStats {
            pending,
            processing,
            completed,
            failed,
            avg_processing_time: Some(12.0),
        }
    }

    #[test]
    fn test_deep_queue_is_critical_with_few_failures() {
        let summary = HealthSummary::evaluate(&stats(55, 2, 100, 3), &HealthThresholds::default());
        assert_eq!(summary.queue_depth, HealthBand::Critical);
        assert_eq!(summary.error_rate, HealthBand::Healthy);
        assert_eq!(summary.processing, HealthBand::Healthy);
        assert_eq!(summary.overall(), HealthBand::Critical);
        assert_eq!(summary.avg_processing_secs, Some(12.0));
    }

    #[test]
    fn test_queue_band_edges() {
        let t = HealthThresholds::default();
        let band = |pending| HealthSummary::evaluate(&stats(pending, 0, 0, 0), &t).queue_depth;
        assert_eq!(band(9), HealthBand::Healthy);
        assert_eq!(band(10), HealthBand::Warning);
        assert_eq!(band(49), HealthBand::Warning);
        assert_eq!(band(50), HealthBand::Critical);
    }

    #[test]
    fn test_error_rate_edges_and_disabled_critical() {
        let t = HealthThresholds::default();
        let band = |failed, t: &HealthThresholds| {
            HealthSummary::evaluate(&stats(0, 0, 0, failed), t).error_rate
        };
        assert_eq!(band(4, &t), HealthBand::Healthy);
        assert_eq!(band(5, &t), HealthBand::Warning);
        assert_eq!(band(25, &t), HealthBand::Critical);

        let no_critical = HealthThresholds {
            failed_critical: None,
            ..t
        };
        assert_eq!(band(1000, &no_critical), HealthBand::Warning);
    }

    #[test]
    fn test_processing_is_healthy_unless_configured() {
        let t = HealthThresholds::default();
        let summary = HealthSummary::evaluate(&stats(0, 500, 0, 0), &t);
        assert_eq!(summary.processing, HealthBand::Healthy);

        let t = HealthThresholds {
            processing_warning: Some(20),
            ..t
        };
        let summary = HealthSummary::evaluate(&stats(0, 500, 0, 0), &t);
        assert_eq!(summary.processing, HealthBand::Warning);
        assert_eq!(summary.overall(), HealthBand::Warning);
    }
}
