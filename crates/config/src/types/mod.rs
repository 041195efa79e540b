//! Configuration types for jobwatch.
//!
//! Responsibilities:
//! - Define the connection, authentication, and dashboard settings.
//! - Define the on-disk profile shape.
//!
//! Does NOT handle:
//! - Loading configuration (see `loader` module).
//! - Reading the profiles file (see `persistence` module).

mod connection;
mod dashboard;
mod profile;

pub use connection::{AuthConfig, Config, ConnectionConfig};
pub use dashboard::{DashboardConfig, HealthThresholds};
pub use profile::ProfileConfig;
