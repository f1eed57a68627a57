//! Error types for configuration and catalog loading.

use std::path::PathBuf;

/// Errors raised while loading or validating the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown theme '{0}' (expected one of: cmd, phosphor, amber)")]
    UnknownTheme(String),

    #[error("timing.{field} must be greater than zero")]
    ZeroTiming { field: &'static str },
}

/// Errors raised while loading a command catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Catalog must contain at least one command")]
    Empty,
}

/// The one error a visitor can cause: typing something the catalog does
/// not know. Its message is shown in place of command output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not recognized as a command.")]
pub struct UnrecognizedCommand {
    pub input: String,
}
