//! Integration tests for material extraction over a full dataset.
//!
//! The fixture holds 8 spell records: six distinct material components, one
//! spell with no material at all (Antilife Shell), and one duplicate
//! (Fireball repeats Delayed Blast Fireball's component).

use grimoire::Spellbook;

use super::helpers::fixtures_dir;

fn fixture_book() -> Spellbook {
    Spellbook::parse(fixtures_dir().join("spells.json")).expect("Failed to parse fixture")
}

#[test]
fn fixture_extracts_six_distinct_materials() {
    let report = fixture_book().materials().unwrap();
    assert_eq!(report.len(), 6);
}

#[test]
fn fixture_materials_keep_first_occurrence_order() {
    let report = fixture_book().materials().unwrap();
    let descriptions: Vec<&str> = report
        .materials
        .iter()
        .map(|entry| entry.description.as_str())
        .collect();

    assert_eq!(
        descriptions,
        [
            "a strip of white cloth",
            "a bell and silver wire",
            "gold dust worth 25+ GP, which the spell consumes",
            "specially marked sticks, bones, cards, or other divinatory tokens worth 25+ GP",
            "a ball of bat guano and sulfur",
            "a diamond worth 300+ GP, which the spell consumes",
        ]
    );
}

#[test]
fn fixture_costed_materials_carry_cost_and_consume() {
    let report = fixture_book().materials().unwrap();

    // Arcane Lock: 25 GP, consumed
    assert_eq!(report.materials[2].cost, Some(2500));
    assert!(report.materials[2].consume);

    // Augury: 25 GP, kept
    assert_eq!(report.materials[3].cost, Some(2500));
    assert!(!report.materials[3].consume);

    // Revivify: 300 GP, consumed
    assert_eq!(report.materials[5].cost, Some(30000));
    assert!(report.materials[5].consume);
}

#[test]
fn fixture_plain_materials_default_cost_and_consume() {
    let report = fixture_book().materials().unwrap();

    let aid = &report.materials[0];
    assert_eq!(aid.cost, None);
    assert!(!aid.consume);
}

#[test]
fn report_serializes_with_null_costs() {
    let report = fixture_book().materials().unwrap();
    let value = serde_json::to_value(&report).unwrap();

    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1, "report envelope has exactly one field");

    let entries = value["materials"].as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert!(entries[0]["cost"].is_null());
    assert_eq!(entries[2]["cost"], serde_json::json!(2500));
}

#[test]
fn extraction_leaves_the_book_unchanged() {
    let book = fixture_book();
    let snapshot = book.clone();

    book.materials().unwrap();

    assert_eq!(book, snapshot);
}
