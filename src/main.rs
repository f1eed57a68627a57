//! termfolio command-line entry point

mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use termfolio::cli::{Cli, Commands, ConfigCommands, PlayArgs};
use termfolio::logging::{self, LogTarget};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn run(cli: Cli) -> Result<ExitCode> {
    let Cli {
        config,
        catalog,
        log_file,
        command,
    } = cli;
    let command = command.unwrap_or(Commands::Play(PlayArgs::default()));

    // The TUI owns the screen: log only when given a file.
    let target = match (&log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play(_)) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(target, "warn")?;

    match command {
        Commands::Play(args) => {
            let config = commands::load_config(config.as_deref())?;
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::play::handle(&args, &config, catalog)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exec { command } => {
            let config = commands::load_config(config.as_deref())?;
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::exec::handle(&command, &catalog, &config)
        }
        Commands::List => {
            let config = commands::load_config(config.as_deref())?;
            let catalog = commands::load_catalog(catalog.as_deref(), &config)?;
            commands::list::handle(&catalog, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show(config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config(ConfigCommands::Path) => {
            commands::config::handle_path(config.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(ExitCode::SUCCESS)
        }
    }
}
