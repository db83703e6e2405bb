//! grimoire binary entry point.

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use grimoire::cli::{Cli, Command};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Materials {
            file,
            output,
            compact,
        } => commands::materials::handle(&file, output.as_deref(), compact),
        Command::Completions { shell } => commands::completions::handle(shell),
    }
}

/// Install the fmt subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` lowers the filter to
/// trace and the default stays at warn, keeping normal runs silent.
#[cfg(not(tarpaulin_include))]
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "grimoire=trace"
    } else {
        "grimoire=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
