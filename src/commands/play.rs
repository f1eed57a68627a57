//! Play subcommand handler

use anyhow::{bail, Result};

use termfolio::cli::PlayArgs;
use termfolio::tui::{Chrome, PortfolioApp, Theme};
use termfolio::{Catalog, Config, ConfigError, Session};

/// Open the portfolio window and run until the visitor quits.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &PlayArgs, config: &Config, catalog: Catalog) -> Result<()> {
    let mode = args.mode.unwrap_or(config.display.mode);
    let theme = match &args.theme {
        Some(name) => {
            Theme::by_name(name).ok_or_else(|| ConfigError::UnknownTheme(name.clone()))?
        }
        None => config.theme()?,
    };

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("play needs an interactive terminal (try `termfolio exec <COMMAND>`)");
    }

    let session = Session::new(mode, catalog, config.timing());
    let chrome = Chrome {
        title: config.display.title.clone(),
        prompt: config.display.prompt.clone(),
    };
    let mut app = PortfolioApp::new(session, chrome, theme)?;
    app.run()
}
