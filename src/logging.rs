//! Tracing subscriber setup.
//!
//! The TUI owns the screen, so it only logs when given a file. Plain CLI
//! subcommands log to stderr. `RUST_LOG` overrides the default level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// No subscriber is installed
    Off,
    Stderr,
    File(&'a Path),
}

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(target: LogTarget<'_>, default_level: &str) -> std::io::Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact()
                .try_init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter(default_level))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
    }
    Ok(())
}
