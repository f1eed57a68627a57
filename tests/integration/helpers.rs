//! Shared fixtures for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{Duration, Instant};

use tempfile::TempDir;

use termfolio::{Session, SessionEvent, Transition};

/// Run the termfolio binary and capture (stdout, stderr, exit code).
pub fn run_termfolio(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_termfolio"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute termfolio");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Write `content` to `name` inside a fresh temp dir.
///
/// Keep the returned dir alive for as long as the file is needed.
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

/// A small two-entry catalog.
pub const SMALL_CATALOG: &str = r#"
[[commands]]
trigger = "boot"
output = ["Booting...", "Done."]

[[commands]]
trigger = "whoami"
output = ["guest"]
"#;

/// Tick `session` every `step` from `start` until `until` has elapsed.
pub fn drive(
    session: &mut Session,
    start: Instant,
    until: Duration,
    step: Duration,
) -> Vec<Transition> {
    let mut transitions = Vec::new();
    let mut now = start;
    while now <= start + until {
        transitions.extend(session.update(SessionEvent::Tick(now)));
        now += step;
    }
    transitions
}

/// Type `text` and press Enter.
pub fn type_line(session: &mut Session, text: &str) -> Vec<Transition> {
    let mut transitions = Vec::new();
    for c in text.chars() {
        transitions.extend(session.update(SessionEvent::Char(c)));
    }
    transitions.extend(session.update(SessionEvent::Submit));
    transitions
}
