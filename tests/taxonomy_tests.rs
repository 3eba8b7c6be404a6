mod common;
use common::*;
use std::fs;
use workhours::config::Taxonomy;
use workhours::config::taxonomy::FALLBACK_COLOR;
use workhours::models::fields::parse_hours;
use workhours::models::{EntryDraft, EntryFields, ValidationError};

fn draft(category: &str, subcategory: &str, hours: &str) -> EntryDraft {
    EntryDraft {
        category: category.into(),
        subcategory: subcategory.into(),
        hours: hours.into(),
        memo: String::new(),
    }
}

#[test]
fn test_default_taxonomy() {
    let t = Taxonomy::default();
    let names: Vec<&str> = t.categories().collect();
    assert_eq!(
        names,
        vec![
            "Linuxアプリ",
            "Linuxカーネル",
            "Linux uboot",
            "Linux rootfs",
            "RTOS DSPソフト"
        ]
    );
    assert_eq!(t.color(APP), "#4CAF50");
    assert_eq!(t.subcategories(APP).len(), 4);
    assert!(t.has_subcategory(KERNEL, DEVICE));
    assert!(!t.has_subcategory(KERNEL, AUDIO));
}

#[test]
fn test_unknown_category_lookups() {
    let t = Taxonomy::default();
    assert_eq!(t.color("Nope"), FALLBACK_COLOR);
    assert!(t.subcategories("Nope").is_empty());
    assert!(!t.has_category("Nope"));
}

#[test]
fn test_load_missing_or_malformed_falls_back_to_default() {
    let dir = setup_test_dir("taxonomy_fallback");

    let missing = Taxonomy::load(&dir.join("missing.json"));
    assert_eq!(missing, Taxonomy::default());

    let broken = dir.join("broken.json");
    fs::write(&broken, "{ \"A\": ").unwrap();
    assert_eq!(Taxonomy::load(&broken), Taxonomy::default());

    let wrong_shape = dir.join("wrong_shape.json");
    fs::write(&wrong_shape, r#"{ "A": { "color": 3 } }"#).unwrap();
    assert_eq!(Taxonomy::load(&wrong_shape), Taxonomy::default());
}

#[test]
fn test_load_keeps_document_order() {
    let dir = setup_test_dir("taxonomy_order");
    let path = dir.join("config.json");
    fs::write(
        &path,
        r##"{
            "Zeta":  { "color": "#000001", "subcategories": ["z2", "z1"] },
            "Alpha": { "color": "#000002", "subcategories": [] },
            "Mid":   { "color": "#000003", "subcategories": ["m"] }
        }"##,
    )
    .unwrap();

    let t = Taxonomy::load(&path);
    assert_eq!(t.categories().collect::<Vec<_>>(), vec!["Zeta", "Alpha", "Mid"]);
    assert_eq!(t.subcategories("Zeta"), ["z2".to_string(), "z1".to_string()]);
    assert_eq!(t.color("Mid"), "#000003");
}

#[test]
fn test_default_document_roundtrips_through_json() {
    let t = Taxonomy::default();
    let json = t.to_json_pretty().unwrap();
    assert_eq!(Taxonomy::from_json(&json).unwrap(), t);
}

#[test]
fn test_validation_errors() {
    let t = Taxonomy::default();

    assert_eq!(
        EntryFields::validate(draft("", AUDIO, "1"), &t),
        Err(ValidationError::MissingCategory)
    );
    assert_eq!(
        EntryFields::validate(draft("Nope", AUDIO, "1"), &t),
        Err(ValidationError::UnknownCategory("Nope".into()))
    );
    assert_eq!(
        EntryFields::validate(draft(APP, "", "1"), &t),
        Err(ValidationError::MissingSubcategory)
    );
    assert_eq!(
        EntryFields::validate(draft(APP, DEVICE, "1"), &t),
        Err(ValidationError::UnknownSubcategory {
            category: APP.into(),
            subcategory: DEVICE.into()
        })
    );
    for bad in ["", "0", "-1", "abc", "NaN", "inf"] {
        assert_eq!(
            EntryFields::validate(draft(APP, AUDIO, bad), &t),
            Err(ValidationError::InvalidHours(bad.into())),
            "hours {bad:?}"
        );
    }
}

#[test]
fn test_valid_fields() {
    let f = EntryFields::validate(draft(APP, AUDIO, " 1.25 "), &Taxonomy::default()).unwrap();
    assert_eq!(f.category(), APP);
    assert_eq!(f.subcategory(), AUDIO);
    assert_eq!(f.hours(), 1.25);
    assert_eq!(f.memo(), "");
}

#[test]
fn test_parse_hours() {
    assert_eq!(parse_hours("2.5"), Some(2.5));
    assert_eq!(parse_hours("8"), Some(8.0));
    assert_eq!(parse_hours("0.01"), Some(0.01));
    assert_eq!(parse_hours("0"), None);
    assert_eq!(parse_hours("1e400"), None);
}
