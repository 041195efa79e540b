//! Configuration management for jobwatch.
//!
//! This crate provides types and loaders for the admin API connection and
//! the dashboard settings, read from `.env` files, environment variables,
//! and a JSON profile file.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ProfilesFile, default_config_path};
pub use types::{
    AuthConfig, Config, ConnectionConfig, DashboardConfig, HealthThresholds, ProfileConfig,
};
