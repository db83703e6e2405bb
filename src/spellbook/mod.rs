//! Spell dataset model and loader
//!
//! A spellbook file is a JSON document holding an array of spell records in
//! the 5etools flavor. Only the `components` block is modeled; every other
//! field of a record rides along untouched, so a dataset never has to pass
//! full schema validation to be usable here.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::materials::{self, ExtractError, MaterialsReport};

/// A single spell record.
///
/// `name` is kept for diagnostics and `components` for extraction; the rest
/// of the record lands in `extra` without validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spell {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<SpellComponents>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The casting components of a spell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellComponents {
    /// Verbal component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v: Option<bool>,
    /// Somatic component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<bool>,
    /// Material component: absent, a bare description string, or a detailed
    /// object with cost and consumption flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m: Option<Material>,
}

/// A material component as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Material {
    /// Bare description string ("a strip of white cloth")
    Simple(String),
    /// Detailed form carrying a description plus optional cost and
    /// consumption flag
    Detailed(MaterialDetail),
}

/// The detailed (object) form of a material component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDetail {
    /// Description of the component
    pub text: String,
    /// Cost in copper pieces (2500 = 25 GP)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    /// Whether casting consumes the component
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consume: Option<bool>,
}

impl Material {
    /// The descriptive text, regardless of form.
    pub fn text(&self) -> &str {
        match self {
            Material::Simple(text) => text,
            Material::Detailed(detail) => &detail.text,
        }
    }

    /// Raw cost as recorded in the dataset; only the detailed form has one.
    pub fn cost(&self) -> Option<u32> {
        match self {
            Material::Simple(_) => None,
            Material::Detailed(detail) => detail.cost,
        }
    }

    /// Consumption flag; `false` unless the detailed form says otherwise.
    pub fn consume(&self) -> bool {
        match self {
            Material::Simple(_) => false,
            Material::Detailed(detail) => detail.consume.unwrap_or(false),
        }
    }
}

/// A loaded spell dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spellbook {
    pub spells: Vec<Spell>,
}

impl Spellbook {
    /// Parse a spellbook from a path.
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read spellbook: {:?}", path))?;

        Self::parse_str(&content).with_context(|| format!("Failed to parse spellbook: {:?}", path))
    }

    /// Parse a spellbook from a reader.
    pub fn parse_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("Failed to read spellbook")?;

        Self::parse_str(&content)
    }

    /// Parse from a string.
    pub fn parse_str(content: &str) -> Result<Self> {
        let spells: Vec<Spell> = serde_json::from_str(content)
            .context("Spellbook must be a JSON array of spell records")?;

        Ok(Spellbook { spells })
    }

    /// Number of spell records in the book.
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Extract the normalized material-component report for this book.
    ///
    /// Convenience wrapper around [`materials::extract`].
    pub fn materials(&self) -> Result<MaterialsReport, ExtractError> {
        materials::extract(&self.spells)
    }
}
