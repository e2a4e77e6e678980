//! Integration Test: Headless Core
//!
//! **Policy**: `card/core` holds all behavior and must build without a
//! terminal or an audio device. Rendering crates belong to `tui` only.

use std::fs;

use architectural_enforcement::{code_part, rust_sources, workspace_root};

const FORBIDDEN: &[&str] = &["ratatui", "crossterm", "rodio"];

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("card/core/Cargo.toml"))
        .expect("core manifest");

    for line in manifest.lines() {
        let name = line.split('=').next().unwrap_or("").trim();
        assert!(
            !FORBIDDEN.contains(&name),
            "card/core depends on {name}, which belongs in tui"
        );
    }
}

#[test]
fn test_core_sources_do_not_use_ui_crates() {
    let mut violations = Vec::new();

    for (path, content) in rust_sources("card/core/src") {
        for (idx, line) in content.lines().enumerate() {
            let code = code_part(line);
            for krate in FORBIDDEN {
                if code.contains(&format!("{krate}::")) {
                    violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
                }
            }
        }
    }

    assert!(violations.is_empty(), "UI crates used in core:\n{}", violations.join("\n"));
}
