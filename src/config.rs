//! Configuration management
//!
//! Settings live in `<config_dir>/termfolio/config.toml`. Every field has a
//! default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::session::{Mode, Timing};
use crate::tui::theme::Theme;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub timing: TimingConfig,
    pub catalog: CatalogConfig,
}

/// Window chrome and session variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color theme: cmd, phosphor or amber
    pub theme: String,
    /// Text shown in the title bar
    pub title: String,
    /// Prompt printed before every command
    pub prompt: String,
    /// Session variant to play
    pub mode: Mode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: "cmd".to_string(),
            title: r"C:\Portfolio\terminal.exe".to_string(),
            prompt: r"C:\>".to_string(),
            mode: Mode::Interactive,
        }
    }
}

/// Animation delays, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub char_delay_ms: u64,
    pub settle_delay_ms: u64,
    pub intro_settle_delay_ms: u64,
    pub line_interval_ms: u64,
    pub advance_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 70,
            settle_delay_ms: 800,
            intro_settle_delay_ms: 600,
            line_interval_ms: 400,
            advance_delay_ms: 600,
        }
    }
}

impl TimingConfig {
    /// Every delay must be at least one millisecond.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delays = [
            ("char_delay_ms", self.char_delay_ms),
            ("settle_delay_ms", self.settle_delay_ms),
            ("intro_settle_delay_ms", self.intro_settle_delay_ms),
            ("line_interval_ms", self.line_interval_ms),
            ("advance_delay_ms", self.advance_delay_ms),
        ];
        match delays.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::ZeroTiming { field: *field }),
            None => Ok(()),
        }
    }

    pub fn to_timing(&self) -> Timing {
        Timing {
            char_delay: Duration::from_millis(self.char_delay_ms),
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            intro_settle_delay: Duration::from_millis(self.intro_settle_delay_ms),
            line_interval: Duration::from_millis(self.line_interval_ms),
            advance_delay: Duration::from_millis(self.advance_delay_ms),
        }
    }
}

/// Where commands come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog to use instead of the built-in portfolio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("termfolio").join("config.toml"))
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.theme()?;
        self.timing.validate()
    }

    /// The configured theme.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Theme::by_name(&self.display.theme)
            .ok_or_else(|| ConfigError::UnknownTheme(self.display.theme.clone()))
    }

    pub fn timing(&self) -> Timing {
        self.timing.to_timing()
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
