//! Command-line interface definition
//!
//! Lives in the library so `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::session::Mode;

/// A retro command-prompt portfolio for your terminal.
#[derive(Debug, Parser)]
#[command(name = "termfolio", version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML command catalog to use instead of the built-in portfolio
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Append logs to this file (the TUI never logs to the screen)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the portfolio window (default)
    Play(PlayArgs),

    /// Run one command and print its output
    #[command(arg_required_else_help = true)]
    Exec {
        /// Command to run; words are joined with spaces
        #[arg(required = true, trailing_var_arg = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// List every command in catalog order
    List,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options for the portfolio window.
#[derive(Debug, Default, clap::Args)]
pub struct PlayArgs {
    /// Session variant (overrides config)
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,

    /// Color theme: cmd, phosphor or amber (overrides config)
    #[arg(long)]
    pub theme: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file location
    Path,
}
