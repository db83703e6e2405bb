//! CLI command handlers.

pub mod completions;
pub mod materials;
