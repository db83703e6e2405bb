//! Materials subcommand handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use grimoire::Spellbook;

/// Extract the material-component report from a dataset and emit it as JSON.
///
/// Writes pretty-printed JSON to stdout unless `output` redirects it to a
/// file or `compact` asks for the single-line form. Stdout carries nothing
/// but the report, so the command stays pipe-friendly.
pub fn handle(file: &Path, output: Option<&Path>, compact: bool) -> Result<()> {
    let spellbook = Spellbook::parse(file)?;
    info!(spells = spellbook.len(), "loaded spellbook");

    let report = spellbook.materials()?;
    info!(materials = report.len(), "extracted material components");

    let json = if compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };

    match output {
        Some(path) => fs::write(path, format!("{}\n", json))
            .with_context(|| format!("Failed to write report: {:?}", path))?,
        None => println!("{}", json),
    }

    Ok(())
}
