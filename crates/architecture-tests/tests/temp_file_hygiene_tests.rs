//! Enforce deterministic temp file cleanup patterns in tests.
//!
//! Temp files in tests must come from the tempfile crate's RAII types
//! rather than `std::env::temp_dir()` with manual cleanup.
//!
//! Files are analyzed statically; runtime behavior is not checked.

mod common;

use std::fs;

fn is_test_path(path: &str) -> bool {
    path.contains("/tests/") || path.ends_with("_tests.rs")
}

fn has_tests(content: &str) -> bool {
    content.contains("#[test]") || content.contains("#[tokio::test]")
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for path in common::rust_sources() {
        let display = common::display_path(&path);
        let content = fs::read_to_string(&path).unwrap_or_default();
        if !has_tests(&content) {
            continue;
        }

        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{display}: uses std::env::temp_dir() - prefer tempfile::tempdir() for RAII cleanup"
            ));
        }

        if content.contains("\"/tmp") || content.contains("'/tmp") {
            violations.push(format!(
                "{display}: contains hardcoded /tmp path - prefer tempfile crate"
            ));
        }

        if is_test_path(&display)
            && content.contains("std::fs::remove_file")
            && !content.contains("tempfile")
        {
            violations.push(format!(
                "{display}: uses std::fs::remove_file without tempfile - prefer NamedTempFile"
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempfile_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for path in common::rust_sources() {
        let display = common::display_path(&path);
        if !is_test_path(&display) {
            continue;
        }
        let content = fs::read_to_string(&path).unwrap_or_default();
        if !has_tests(&content) {
            continue;
        }

        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.starts_with("let _ = tempfile::")
                || trimmed.starts_with("let _ = tempdir()")
                || trimmed.starts_with("let _ = NamedTempFile")
                || trimmed.starts_with("let _ = TempDir::new()")
            {
                violations.push(format!(
                    "{display}:{}: tempfile instance bound to `_` - use a named variable",
                    i + 1
                ));
            }

            if (trimmed.contains("tempfile::tempdir()") || trimmed.contains("TempDir::new()"))
                && !trimmed.starts_with("let ")
                && !trimmed.starts_with("//")
            {
                violations.push(format!(
                    "{display}:{}: tempfile call result not retained - bind to a variable",
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found tempfile instances not properly retained:\n{}",
        violations.join("\n")
    );
}
