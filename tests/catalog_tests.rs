//! Tests for loading the bundled lookup tables.

mod common;

use std::fs;

use symbolbar::catalog::loader::{load_aliases, load_categories, load_layerset};
use symbolbar::catalog::resolve_resource_dir;
use symbolbar::model::constants::*;
use symbolbar::model::ReleaseTag;
use symbolbar::{filter, load_catalog, CatalogError};

#[test]
fn loads_full_resource_directory() {
    let dir = tempfile::tempdir().unwrap();
    common::write_resources(dir.path());

    let catalog = load_catalog(dir.path());
    assert_eq!(catalog.symbols(), ["bolt", "cloud", "heart", "star"]);
    assert_eq!(catalog.release("bolt"), Some(ReleaseTag::new(2023, 1)));
    assert_eq!(catalog.release("cloud"), None);
    assert_eq!(catalog.keywords_of("heart"), ["love"]);
}

#[test]
fn aliases_are_inverted_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    common::write_resources(dir.path());

    let aliases = load_aliases(&dir.path().join(NAME_ALIASES_FILE)).unwrap();
    assert_eq!(aliases["bolt"], ["lightning", "zap"]);
    assert_eq!(aliases["star"], ["favorite"]);
}

#[test]
fn malformed_category_entries_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    common::write_resources(dir.path());

    let categories = load_categories(&dir.path().join(CATEGORIES_FILE)).unwrap();
    let keys: Vec<_> = categories.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["all", "weather"]);
}

#[test]
fn missing_whats_new_is_prepended() {
    let dir = tempfile::tempdir().unwrap();
    common::write_resources(dir.path());

    let catalog = load_catalog(dir.path());
    let keys: Vec<_> = catalog.categories().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, ["whatsnew", "all", "weather"]);
}

#[test]
fn empty_directory_gives_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();

    let catalog = load_catalog(dir.path());
    assert!(catalog.is_empty());
    assert_eq!(catalog.categories().len(), 2);
    assert!(filter(&catalog, CATEGORY_ALL, "").is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_layerset(&dir.path().join(LAYERSET_FILE)).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn wrong_root_type_is_a_shape_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(CATEGORIES_FILE);
    fs::write(
        &path,
        "<?xml version=\"1.0\"?><plist version=\"1.0\"><dict/></plist>",
    )
    .unwrap();

    let err = load_categories(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Shape { .. }));
}

#[test]
fn broken_table_does_not_affect_others() {
    let dir = tempfile::tempdir().unwrap();
    common::write_resources(dir.path());
    fs::write(dir.path().join(SYMBOL_SEARCH_FILE), "not a plist").unwrap();

    let catalog = load_catalog(dir.path());
    assert_eq!(catalog.len(), 4);
    assert!(catalog.keywords_of("heart").is_empty());
    assert_eq!(filter(&catalog, "weather", ""), ["bolt", "cloud"]);
}

#[test]
fn strings_syntax_error_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    fs::write(&path, "\"a\" = \"b\";\n\"c\" = \"d\"\n").unwrap();

    match load_aliases(&path).unwrap_err() {
        CatalogError::Strings { line, .. } => assert!(line >= 2),
        other => panic!("unexpected error: {other}"),
    }
}

// ----- Alias file encodings -----

fn utf16_with_bom(text: &str, big_endian: bool) -> Vec<u8> {
    let mut bytes = if big_endian {
        vec![0xFE, 0xFF]
    } else {
        vec![0xFF, 0xFE]
    };
    for unit in text.encode_utf16() {
        let pair = if big_endian {
            unit.to_be_bytes()
        } else {
            unit.to_le_bytes()
        };
        bytes.extend_from_slice(&pair);
    }
    bytes
}

#[test]
fn utf16le_strings_file_loads_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    fs::write(&path, utf16_with_bom("\"bolt.old\" = \"bolt\";\n", false)).unwrap();

    let aliases = load_aliases(&path).unwrap();
    assert_eq!(aliases["bolt"], ["bolt.old"]);
}

#[test]
fn utf16be_strings_file_loads_aliases() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    let text = "/* renamed */\n\"bolt.old\" = \"bolt\";\n\"zap\" = \"bolt\";\n";
    fs::write(&path, utf16_with_bom(text, true)).unwrap();

    let aliases = load_aliases(&path).unwrap();
    assert_eq!(aliases["bolt"], ["bolt.old", "zap"]);
}

#[test]
fn utf8_bom_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"\"favorite\" = \"star\";\n");
    fs::write(&path, bytes).unwrap();

    let aliases = load_aliases(&path).unwrap();
    assert_eq!(aliases["star"], ["favorite"]);
}

#[test]
fn binary_plist_alias_table_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    let mut dict = plist::Dictionary::new();
    dict.insert("bolt.old".to_string(), plist::Value::String("bolt".to_string()));
    dict.insert("lightning".to_string(), plist::Value::String("bolt".to_string()));
    dict.insert("favorite".to_string(), plist::Value::String("star".to_string()));
    plist::Value::Dictionary(dict).to_file_binary(&path).unwrap();

    let aliases = load_aliases(&path).unwrap();
    assert_eq!(aliases["bolt"], ["bolt.old", "lightning"]);
    assert_eq!(aliases["star"], ["favorite"]);
}

#[test]
fn undecodable_alias_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(NAME_ALIASES_FILE);
    fs::write(&path, [0xC3, 0x28, 0xA0, 0xA1]).unwrap();

    assert!(matches!(
        load_aliases(&path).unwrap_err(),
        CatalogError::Strings { .. }
    ));
}

// ----- Symbol details -----

#[test]
fn symbol_details_gather_every_table() {
    let catalog = common::sample_catalog();

    let bolt = catalog.symbol("bolt").unwrap();
    assert_eq!(bolt.name, "bolt");
    assert_eq!(bolt.release, Some(ReleaseTag::new(2023, 0)));
    assert_eq!(bolt.categories, ["weather"]);
    assert_eq!(bolt.aliases, ["lightning"]);

    let heart = catalog.symbol("heart").unwrap();
    assert_eq!(heart.keywords, ["love", "like"]);
    assert!(heart.aliases.is_empty());

    assert!(catalog.symbol("lightning").is_none());
}

// ----- Resource directory -----

#[test]
fn env_override_wins() {
    let bundle = tempfile::tempdir().unwrap();
    common::write_resources(bundle.path());

    let chosen = resolve_resource_dir(
        Some("/custom/tables".into()),
        &[bundle.path().to_path_buf()],
    );
    assert_eq!(chosen, std::path::PathBuf::from("/custom/tables"));
}

#[test]
fn falls_through_to_first_populated_candidate() {
    let app_bundle = tempfile::tempdir().unwrap();
    let core_glyphs = tempfile::tempdir().unwrap();
    common::write_resources(core_glyphs.path());

    let chosen = resolve_resource_dir(
        None,
        &[
            app_bundle.path().to_path_buf(),
            app_bundle.path().join("missing"),
            core_glyphs.path().to_path_buf(),
        ],
    );
    assert_eq!(chosen, core_glyphs.path());
}

#[test]
fn no_populated_candidate_gives_local_resources() {
    let empty = tempfile::tempdir().unwrap();
    let chosen = resolve_resource_dir(None, &[empty.path().to_path_buf()]);
    assert_eq!(chosen, std::path::PathBuf::from("resources"));
}
