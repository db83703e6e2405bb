//! grimoire - material-component extraction for 5e spell datasets
//!
//! A spellbook (a JSON array of spell records in the 5etools flavor) goes in;
//! a deduplicated, first-occurrence-ordered `{ "materials": [...] }` report
//! comes out. [`spellbook`] loads and models the dataset, [`materials`] holds
//! the extractor, and [`cli`] defines the command-line surface shared with
//! the man-page generator.

pub mod cli;
pub mod materials;
pub mod spellbook;
pub mod version;

pub use materials::{ExtractError, MaterialEntry, MaterialsReport};
pub use spellbook::{Material, MaterialDetail, Spell, SpellComponents, Spellbook};
