//! Completions subcommand handler

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use grimoire::cli::Cli;

/// Write a completion script for the given shell to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
    Ok(())
}
