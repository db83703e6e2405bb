//! Output types for the material-component report.

use serde::{Deserialize, Serialize};

use crate::spellbook::Material;

/// A normalized material-component entry.
///
/// `cost` serializes as a number or `null`, never omitted, so every entry
/// carries the same three fields downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Descriptive text of the component
    pub description: String,
    /// Cost in copper pieces; `None` when the dataset gives none (or zero)
    pub cost: Option<u32>,
    /// Whether casting consumes the component
    pub consume: bool,
}

impl From<&Material> for MaterialEntry {
    /// Normalizes one dataset material into an entry.
    ///
    /// The bare string form yields no cost and no consumption. The detailed
    /// form keeps a non-zero cost and a true consumption flag; a zero cost
    /// and an absent flag collapse to `None` / `false`.
    fn from(material: &Material) -> Self {
        MaterialEntry {
            description: material.text().to_string(),
            cost: material.cost().filter(|&cost| cost != 0),
            consume: material.consume(),
        }
    }
}

/// The report envelope: exactly one field, `materials`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialsReport {
    pub materials: Vec<MaterialEntry>,
}

impl MaterialsReport {
    /// Number of distinct material components in the report.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
