//! jobwatch CLI - scriptable access to the background job queue.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - List, inspect, retry, and cancel jobs through the shared client library.
//! - Format results as table, JSON, or CSV.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Interactive monitoring (see `crates/tui`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr so stdout stays machine-readable.

mod args;
mod commands;
mod config;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use jobwatch_config::ConfigLoader;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let (config, profile) = match config::load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, profile, &cancel).await {
        Ok(output) => {
            print!("{output}");
            if !output.is_empty() && !output.ends_with('\n') {
                println!();
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = e.exit_code();
            if code == ExitCode::Interrupted {
                eprintln!("Operation cancelled.");
            } else {
                eprintln!("{:#}", e);
            }
            code
        }
    };

    std::process::exit(exit_code.as_i32());
}
