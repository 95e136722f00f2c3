//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Nothing in the workspace may block a thread to wait. Every
//! scripted delay and frame tick goes through `tokio::time`, which keeps
//! the sequence testable on a paused clock.

use architectural_enforcement::{assert_clean, find_violations};

const BLOCKING_SLEEPS: &[&str] = &["thread::sleep(", "std::thread::sleep"];

#[test]
fn test_no_blocking_sleep_in_tui() {
    let violations = find_violations("tui/src", BLOCKING_SLEEPS);
    assert_clean("blocking sleep in voidkeeper-tui", &violations);
}

#[test]
fn test_no_blocking_sleep_in_core() {
    let violations = find_violations("presenter/core/src", BLOCKING_SLEEPS);
    assert_clean("blocking sleep in voidkeeper-core", &violations);
}

#[test]
fn test_no_blocking_sleep_in_tui_tests() {
    let violations = find_violations("tui/tests", BLOCKING_SLEEPS);
    assert_clean("blocking sleep in voidkeeper-tui tests", &violations);
}
