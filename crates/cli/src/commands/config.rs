//! `config` subcommands.

use anyhow::Result;
use clap::Subcommand;
use jobwatch_config::Config;

use crate::formatters::{ConfigView, Formatter};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration (token redacted)
    Show,
}

pub fn run(
    command: ConfigCommand,
    config: &Config,
    profile: Option<String>,
    formatter: &dyn Formatter,
) -> Result<String> {
    match command {
        ConfigCommand::Show => formatter.format_config(&ConfigView::new(config, profile)),
    }
}
