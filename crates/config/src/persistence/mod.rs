//! Profile file persistence.
//!
//! Responsibilities:
//! - Resolve the default profile file location.
//! - Read and parse the JSON profile file.
//!
//! Does NOT handle:
//! - Merging profile values with env/CLI values (see `loader`).
//!
//! Invariants:
//! - Profile names are unique within a file (map keys).
//! - A file without a `profiles` key parses as an empty profile set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::ProfileConfig;

mod path;

pub use path::default_config_path;

/// Errors reading the profile file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk layout of the profile file.
///
/// ```json
/// { "profiles": { "prod": { "base_url": "https://app.example.com" } } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilesFile {
    #[serde(default)]
    pub profiles: BTreeMap<String, ProfileConfig>,
}

impl ProfilesFile {
    /// Read and parse the profile file at `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Profile names in sorted order.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }
}
