//! Default profile file location.

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the profile file.
///
/// - Linux: `~/.config/jobwatch/config.json`
/// - macOS: `~/Library/Application Support/jobwatch/config.json`
/// - Windows: `%AppData%\jobwatch\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "jobwatch")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
