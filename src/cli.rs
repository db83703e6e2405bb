//! Command-line interface definitions.
//!
//! Kept in the library so the `xtask` man-page generator can build the same
//! command tree without linking the binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::version::version_string;

/// Extract normalized material-component lists from 5e spell datasets.
#[derive(Debug, Parser)]
#[command(name = "grimoire", version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Surface diagnostic output on stderr (same as RUST_LOG=grimoire=trace)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the deduplicated material-component list from a spell dataset
    Materials {
        /// Path to the spell dataset (a JSON array of spell records)
        file: PathBuf,

        /// Write the report to this path instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Emit single-line JSON instead of pretty-printing
        #[arg(long)]
        compact: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}
