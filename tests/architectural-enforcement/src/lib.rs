//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No sleep() calls in production code; time only moves through frame ticks
//! - The card core stays headless (no terminal or audio crates)
//!
//! Helpers shared by the tests live here.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, from this package's manifest directory
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Every `.rs` file under `dir` (relative to the workspace root) with its contents
pub fn rust_sources(dir: &str) -> Vec<(PathBuf, String)> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            Some((e.path().to_path_buf(), content))
        })
        .collect()
}

/// Code part of a line, without a trailing `//` comment
pub fn code_part(line: &str) -> &str {
    line.split("//").next().unwrap_or(line)
}

/// Index of the line opening `#[cfg(test)]`, if any; everything after is test code
pub fn test_module_start(lines: &[&str]) -> Option<usize> {
    lines.iter().position(|l| l.trim() == "#[cfg(test)]")
}
