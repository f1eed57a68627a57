//! Exec subcommand handler

use std::process::ExitCode;

use anyhow::{bail, Result};

use termfolio::catalog::display_line;
use termfolio::{Catalog, Config};

/// Resolve one command and print its output.
///
/// An unknown command prints the same message the prompt shows and
/// exits with status 1.
pub fn handle(words: &[String], catalog: &Catalog, config: &Config) -> Result<ExitCode> {
    let input = words.join(" ");
    let input = input.trim();
    if input.is_empty() {
        bail!("Nothing to run");
    }
    let theme = config.theme()?;

    match catalog.resolve(input) {
        Ok(command) => {
            for line in &command.output {
                println!("{}", theme.primary_text(display_line(line)));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(unrecognized) => {
            eprintln!("{}", theme.error_text(&unrecognized.to_string()));
            Ok(ExitCode::FAILURE)
        }
    }
}
