//! Shared helpers for architecture tests.
//!
//! Integration tests run with the crate directory as cwd, so every scan
//! starts from the workspace root found here.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk up from the crate directory to the `Cargo.toml` containing `[workspace]`.
pub fn workspace_root() -> PathBuf {
    let start = Path::new(env!("CARGO_MANIFEST_DIR"));
    start
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|content| content.contains("[workspace]"))
        })
        .map(Path::to_path_buf)
        .expect("workspace root with [workspace] Cargo.toml")
}

/// Every `.rs` file under `crates/`, skipping build output and this crate.
pub fn rust_sources() -> Vec<PathBuf> {
    let crates_dir = workspace_root().join("crates");
    WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Path relative to the workspace root, for readable failure messages.
pub fn display_path(path: &Path) -> String {
    let root = workspace_root();
    path.strip_prefix(&root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
