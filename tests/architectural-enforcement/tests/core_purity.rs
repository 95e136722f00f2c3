//! Integration Test: Core Purity
//!
//! **Policy**: `voidkeeper-core` turns the script into styled lines and
//! nothing else. It never writes to stdout or stderr, never touches the
//! async runtime and never reads the clock. Output and pacing belong to
//! `voidkeeper-tui`.

use architectural_enforcement::{assert_clean, find_violations};

const CORE: &str = "presenter/core/src";

#[test]
fn test_core_does_not_print() {
    let violations = find_violations(CORE, &["println!", "print!(", "eprintln!", "eprint!(", "dbg!"]);
    assert_clean("direct printing in voidkeeper-core", &violations);
}

#[test]
fn test_core_has_no_runtime() {
    let violations = find_violations(CORE, &["tokio::", "#[tokio::"]);
    assert_clean("async runtime use in voidkeeper-core", &violations);
}

#[test]
fn test_core_reads_no_clock() {
    let violations = find_violations(CORE, &["Instant::now", "SystemTime::now"]);
    assert_clean("clock reads in voidkeeper-core", &violations);
}

#[test]
fn test_core_does_not_write_to_terminal() {
    let violations = find_violations(CORE, &["io::stdout()", "io::stderr()", "execute!(", "queue!("]);
    assert_clean("terminal writes in voidkeeper-core", &violations);
}
