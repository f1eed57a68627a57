//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

/// Show current configuration as TOML.
pub fn handle_show(explicit: Option<&Path>) -> Result<()> {
    let config = super::load_config(explicit)?;
    let toml_str = config.to_toml_string()?;
    let theme = config.theme()?;
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Print where the config file is (or would be) read from.
pub fn handle_path(explicit: Option<&Path>) -> Result<()> {
    let path = super::config_path(explicit)?;
    println!("{}", path.display());
    Ok(())
}
