//! List subcommand handler

use anyhow::Result;

use termfolio::{Catalog, Config};

/// Print every trigger in catalog order.
pub fn handle(catalog: &Catalog, config: &Config) -> Result<()> {
    let theme = config.theme()?;
    for command in catalog.iter() {
        println!("{}", theme.accent_text(&command.trigger));
    }
    Ok(())
}
