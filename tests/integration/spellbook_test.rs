//! Integration tests for spellbook parsing.

use std::fs;

use grimoire::{Material, Spellbook};

use super::helpers::{fixtures_dir, temp_fixture};

#[test]
fn parses_the_fixture_dataset() {
    let book = Spellbook::parse(fixtures_dir().join("spells.json")).unwrap();
    assert_eq!(book.len(), 8);
    assert_eq!(book.spells[0].name.as_deref(), Some("Aid"));
}

#[test]
fn parses_from_a_copied_file() {
    let (temp_dir, path) = temp_fixture("spells.json");
    let book = Spellbook::parse(&path).expect("Failed to parse copied fixture");

    assert_eq!(book.len(), 8);
    drop(temp_dir);
}

#[test]
fn fixture_covers_both_material_forms() {
    let book = Spellbook::parse(fixtures_dir().join("spells.json")).unwrap();

    let aid = book.spells[0].components.as_ref().unwrap();
    assert!(matches!(aid.m, Some(Material::Simple(_))));

    let arcane_lock = book.spells[3].components.as_ref().unwrap();
    assert!(matches!(arcane_lock.m, Some(Material::Detailed(_))));
}

#[test]
fn fixture_records_keep_unmodeled_fields() {
    let book = Spellbook::parse(fixtures_dir().join("spells.json")).unwrap();
    let aid = &book.spells[0];

    assert!(aid.extra.contains_key("level"));
    assert!(aid.extra.contains_key("entries"));
}

#[test]
fn missing_file_reports_the_read_failure() {
    let err = Spellbook::parse(fixtures_dir().join("no-such-book.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read spellbook"));
}

#[test]
fn malformed_file_reports_the_parse_failure() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Spellbook::parse(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse spellbook"));
}
