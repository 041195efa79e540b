//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `config` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "jobwatch-cli")]
#[command(about = "Inspect and manage the background job queue from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jobwatch-cli jobs list --status failed\n  jobwatch-cli jobs list --type crawl_site --sort duration -o json\n  jobwatch-cli jobs show job_123\n  jobwatch-cli jobs retry job_123\n  jobwatch-cli --profile production health\n"
)]
pub struct Cli {
    /// Base URL of the web application (e.g., https://app.example.com)
    #[arg(short, long, global = true, env = "JOBWATCH_BASE_URL")]
    pub base_url: Option<String>,

    /// Bearer token for the admin API
    #[arg(short, long, global = true, env = "JOBWATCH_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "JOBWATCH_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for transient HTTP failures
    #[arg(long, global = true, env = "JOBWATCH_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Profile name to load from the config file
    #[arg(long, global = true, env = "JOBWATCH_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file
    #[arg(long, global = true, env = "JOBWATCH_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, inspect, retry, and cancel jobs
    Jobs {
        #[command(subcommand)]
        command: commands::jobs::JobsCommand,
    },

    /// Show queue health bands from the current stats
    Health,

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}
