//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce the layering of the
//! workspace:
//! - No blocking sleeps anywhere (all pacing is on the tokio timer)
//! - The rendering core stays pure: no printing, no runtime, no clock
//!
//! The helpers here walk source trees and hand back code lines with line
//! comments stripped, so the tests only have to say what is forbidden.

use std::fs;
use std::path::{Path, PathBuf};

/// A forbidden pattern found in a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.path.display(), self.line, self.text.trim())
    }
}

/// Workspace root, two levels above this crate
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Every `.rs` file under `dir` (relative to the workspace root)
pub fn rust_files(dir: &str) -> Vec<PathBuf> {
    let path = workspace_root().join(dir);
    if !path.exists() {
        return Vec::new();
    }

    walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(|e| e.into_path())
        .collect()
}

/// Code part of each line, numbered from 1, with `//` comments removed
pub fn code_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content.lines().enumerate().map(|(idx, line)| {
        let code = line.split("//").next().unwrap_or(line);
        (idx + 1, code)
    })
}

/// Lines under `dir` whose code contains any of `patterns`
pub fn find_violations(dir: &str, patterns: &[&str]) -> Vec<Violation> {
    let mut violations = Vec::new();
    for path in rust_files(dir) {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => continue,
        };
        for (line, code) in code_lines(&content) {
            if patterns.iter().any(|p| code.contains(p)) {
                violations.push(Violation {
                    path: path.clone(),
                    line,
                    text: code.to_string(),
                });
            }
        }
    }
    violations
}

/// Panic with every violation listed, if there are any
pub fn assert_clean(rule: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ {rule}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }
    panic!("\nFound {} violation(s) of: {rule}", violations.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_lines_strip_comments() {
        let src = "let a = 1; // thread::sleep(x)\n// println!(\"x\")\nfoo();";
        let lines: Vec<_> = code_lines(src).collect();
        assert_eq!(lines, vec![(1, "let a = 1; "), (2, ""), (3, "foo();")]);
    }

    #[test]
    fn test_sources_are_found() {
        assert!(!rust_files("presenter/core/src").is_empty());
        assert!(!rust_files("tui/src").is_empty());
        assert!(rust_files("no/such/dir").is_empty());
    }
}
