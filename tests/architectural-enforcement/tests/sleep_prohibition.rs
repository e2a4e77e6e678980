//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. Animations and
//! the carousel advance only through the frame delta handed to `tick`.
//! **Exceptions**: test code, `tokio::time::interval` frame pacing

use architectural_enforcement::{code_part, rust_sources, test_module_start};

#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();

    for dir in ["card/core/src", "tui/src"] {
        for (path, content) in rust_sources(dir) {
            let lines: Vec<&str> = content.lines().collect();
            let production_end = test_module_start(&lines).unwrap_or(lines.len());

            for (idx, line) in lines[..production_end].iter().enumerate() {
                let code = code_part(line);
                if code.contains("::sleep(") || code.contains(".sleep(") {
                    violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
                }
            }
        }
    }

    if !violations.is_empty() {
        eprintln!("\n❌ Sleep calls found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {}", violation);
        }
        eprintln!("\n✅ Use the frame delta passed to tick/update instead.");
        panic!("Found {} sleep violation(s)", violations.len());
    }
}

#[test]
fn test_scanner_sees_sources() {
    assert!(!rust_sources("card/core/src").is_empty());
    assert!(!rust_sources("tui/src").is_empty());
}
