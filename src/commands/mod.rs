//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod exec;
pub mod list;
pub mod play;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use termfolio::{Catalog, Config};

/// Config file named on the command line, or the default location.
pub fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

/// Load the config from `--config` or the default location.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = config_path(explicit)?;
    if explicit.is_some() && !path.exists() {
        anyhow::bail!("Config file not found: {}", path.display());
    }
    Ok(Config::load_from(&path)?)
}

/// `--catalog` wins over `catalog.path` in the config.
pub fn load_catalog(explicit: Option<&Path>, config: &Config) -> Result<Catalog> {
    let path = explicit.or(config.catalog.path.as_deref());
    Catalog::load_or_builtin(path).context("Failed to load command catalog")
}
