//! Material-component extraction.
//!
//! Turns a sequence of spell records into the `{ "materials": [...] }` report
//! consumed by downstream display logic: one entry per distinct component
//! description, in first-occurrence order, with cost and consumption flag
//! normalized. The extraction is a pure single pass; dataset loading lives in
//! [`crate::spellbook`].

mod extract;
mod types;

pub use extract::{extract, ExtractError};
pub use types::{MaterialEntry, MaterialsReport};
