//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use symbolbar::model::constants::*;
use symbolbar::model::{Category, ReleaseTag};
use symbolbar::{CatalogTables, SymbolCatalog};

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Small catalog: four releases, two real categories, one alias.
pub fn sample_catalog() -> SymbolCatalog {
    let symbols = list(&[
        "heart",
        "heart.fill",
        "star",
        "star.fill",
        "cloud.rain",
        "bolt",
        "sparkles",
    ]);
    let releases = [
        ("heart", "2019"),
        ("heart.fill", "2019"),
        ("star", "2020"),
        ("star.fill", "2021"),
        ("cloud.rain", "2022"),
        ("bolt", "2023"),
        ("sparkles", "2023"),
    ]
    .into_iter()
    .map(|(name, tag)| (name.to_string(), ReleaseTag::parse(tag)))
    .collect();

    let mut category_map = HashMap::new();
    category_map.insert("heart".to_string(), list(&["health"]));
    category_map.insert("heart.fill".to_string(), list(&["health"]));
    category_map.insert("cloud.rain".to_string(), list(&["weather"]));
    category_map.insert("bolt".to_string(), list(&["weather"]));

    let mut keyword_map = HashMap::new();
    keyword_map.insert("heart".to_string(), list(&["love", "like"]));
    keyword_map.insert("cloud.rain".to_string(), list(&["Storm"]));

    let mut alias_map = HashMap::new();
    alias_map.insert("bolt".to_string(), list(&["lightning"]));

    SymbolCatalog::from_tables(CatalogTables {
        symbols,
        releases,
        categories: vec![
            Category::new("heart", "health", "Health"),
            Category::new("cloud", "weather", "Weather"),
        ],
        category_map,
        keyword_map,
        alias_map,
    })
}

/// Writes a full resource directory for the loader.
pub fn write_resources(dir: &Path) {
    fs::write(
        dir.join(LAYERSET_FILE),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>symbols</key>
    <dict>
        <key>star</key>
        <dict><key>hierarchical</key><string>2020</string></dict>
        <key>heart</key>
        <dict><key>hierarchical</key><string>2019</string></dict>
        <key>bolt</key>
        <dict><key>hierarchical</key><string>2023.1</string></dict>
        <key>cloud</key>
        <dict/>
    </dict>
</dict>
</plist>
"#,
    )
    .unwrap();

    fs::write(
        dir.join(CATEGORIES_FILE),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<array>
    <dict>
        <key>icon</key><string>square.grid.2x2</string>
        <key>key</key><string>all</string>
        <key>label</key><string>All</string>
    </dict>
    <dict>
        <key>icon</key><string>cloud</string>
        <key>key</key><string>weather</string>
        <key>label</key><string>Weather</string>
    </dict>
    <dict>
        <key>icon</key><string>questionmark</string>
        <key>label</key><string>No key</string>
    </dict>
</array>
</plist>
"#,
    )
    .unwrap();

    fs::write(
        dir.join(SYMBOL_CATEGORIES_FILE),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>bolt</key>
    <array><string>weather</string></array>
    <key>cloud</key>
    <array><string>weather</string></array>
</dict>
</plist>
"#,
    )
    .unwrap();

    fs::write(
        dir.join(SYMBOL_SEARCH_FILE),
        r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>heart</key>
    <array><string>love</string></array>
</dict>
</plist>
"#,
    )
    .unwrap();

    fs::write(
        dir.join(NAME_ALIASES_FILE),
        "/* Renamed symbols */\n\"zap\" = \"bolt\";\n\"lightning\" = \"bolt\";\n\"favorite\" = \"star\";\n",
    )
    .unwrap();
}
