//! The material-component extractor.
//!
//! One deterministic pass over the spell records: skip spells without a
//! material component, key every component by its descriptive text, keep the
//! first occurrence of each key, and normalize the survivors into
//! [`MaterialEntry`] values.

use std::collections::HashSet;

use tracing::trace;

use crate::spellbook::{Material, Spell};

use super::types::{MaterialEntry, MaterialsReport};

/// Errors raised by [`extract`].
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// A record with no `components` block stops the extraction; a partially
    /// broken dataset is surfaced to the caller instead of silently skipped.
    #[error("spell \"{name}\" (record {index}) has no components block")]
    MissingComponents { index: usize, name: String },
}

/// Extracts the deduplicated material-component report from spell records.
///
/// Entries appear in first-occurrence order of their description text; a
/// description seen again later contributes nothing, no matter what cost or
/// consumption flag the duplicate carries. Spells without a material
/// component (absent, `null`, or an empty string form) are skipped.
///
/// The input is only borrowed: the report owns fresh strings and shares no
/// memory with the records, and the records are never modified.
pub fn extract(spells: &[Spell]) -> Result<MaterialsReport, ExtractError> {
    let mut materials = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, spell) in spells.iter().enumerate() {
        let components =
            spell
                .components
                .as_ref()
                .ok_or_else(|| ExtractError::MissingComponents {
                    index,
                    name: spell.name.clone().unwrap_or_else(|| "unnamed".to_string()),
                })?;

        let material = match &components.m {
            None => continue,
            // An empty string form means "no component", same as absent
            Some(Material::Simple(text)) if text.is_empty() => continue,
            Some(material) => material,
        };

        if seen.contains(material.text()) {
            continue;
        }

        if let Material::Detailed(detail) = material {
            trace!(
                text = %detail.text,
                cost = ?detail.cost,
                consume = ?detail.consume,
                "recording detailed material component"
            );
        }

        seen.insert(material.text().to_string());
        materials.push(MaterialEntry::from(material));
    }

    Ok(MaterialsReport { materials })
}
