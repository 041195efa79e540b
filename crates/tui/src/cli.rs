//! Command-line arguments for jobwatch-tui.
//!
//! Responsibilities:
//! - Define the CLI surface with clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//!
//! Invariants:
//! - Parsed once at startup via `Cli::parse()`.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for jobwatch-tui.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (`JOBWATCH_*`)
/// 3. Profile configuration
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "jobwatch-tui",
    about = "Terminal dashboard for the background job queue",
    version,
    after_help = "Examples:\n  jobwatch-tui\n  jobwatch-tui --profile production\n  jobwatch-tui --base-url https://app.example.com --poll-interval 10\n  jobwatch-tui --no-auto-refresh --log-dir /var/log/jobwatch\n"
)]
pub struct Cli {
    /// Config profile name to load
    #[arg(long, short = 'p')]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Base URL of the admin API host (overrides env and profile)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for the admin API (prefer JOBWATCH_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// Seconds between automatic refreshes
    #[arg(long)]
    pub poll_interval: Option<u64>,

    /// Rows per table page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Start with auto-refresh disabled
    #[arg(long)]
    pub no_auto_refresh: bool,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "localhost:9090")
    #[arg(long, env = "JOBWATCH_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["jobwatch-tui"]);
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
        assert!(!cli.no_auto_refresh);
        assert!(!cli.no_mouse);
        assert!(cli.poll_interval.is_none());
    }

    #[test]
    fn test_dashboard_overrides() {
        let cli = Cli::parse_from([
            "jobwatch-tui",
            "--poll-interval",
            "10",
            "--page-size",
            "50",
            "--no-auto-refresh",
            "-p",
            "staging",
        ]);
        assert_eq!(cli.poll_interval, Some(10));
        assert_eq!(cli.page_size, Some(50));
        assert!(cli.no_auto_refresh);
        assert_eq!(cli.profile.as_deref(), Some("staging"));
    }

    #[test]
    fn test_rejects_non_numeric_interval() {
        assert!(Cli::try_parse_from(["jobwatch-tui", "--poll-interval", "soon"]).is_err());
    }
}
