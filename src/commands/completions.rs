//! Completions subcommand handler

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use termfolio::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "termfolio", &mut io::stdout());
}
