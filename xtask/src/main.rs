//! Workspace tasks for grimoire.
//!
//! `cargo run -p xtask -- man [DIR]` renders man pages from the clap
//! definitions in the main crate.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use grimoire::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "grimoire workspace tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into the given directory
    Man {
        /// Output directory (created if missing)
        #[arg(default_value = "target/man")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { dir } => generate_man_pages(&dir),
    }
}

/// Render `grimoire.1` plus one page per subcommand.
fn generate_man_pages(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    clap_mangen::generate_to(Cli::command(), dir)
        .with_context(|| format!("Failed to render man pages into {:?}", dir))?;

    println!("man pages written to {}", dir.display());
    Ok(())
}
