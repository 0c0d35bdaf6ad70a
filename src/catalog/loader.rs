//! Reads the bundled lookup tables from a resource directory.
//!
//! Each table loads on its own: a missing or malformed file is logged and
//! replaced by an empty table, so a broken resource never stops the app.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use plist::Value;

use super::strings::parse_strings;
use super::{CatalogTables, SymbolCatalog};
use crate::error::CatalogError;
use crate::model::constants::*;
use crate::model::{Category, ReleaseTag};

/// Locates the resource directory.
///
/// Order: `$SYMBOLBAR_RESOURCES`, `<exe dir>/../Resources` (app bundle),
/// `./resources`, then the system CoreGlyphs bundle.
pub fn default_resource_dir() -> PathBuf {
    let mut candidates = Vec::with_capacity(3);
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("../Resources"));
        }
    }
    candidates.push(PathBuf::from("resources"));
    candidates.push(PathBuf::from(CORE_GLYPHS_RESOURCES));

    resolve_resource_dir(env::var_os(ENV_RESOURCES).map(PathBuf::from), &candidates)
}

/// Picks `env_override` if set, else the first candidate holding the
/// availability table, else `./resources`.
pub fn resolve_resource_dir(env_override: Option<PathBuf>, candidates: &[PathBuf]) -> PathBuf {
    if let Some(dir) = env_override {
        return dir;
    }
    candidates
        .iter()
        .find(|dir| dir.join(LAYERSET_FILE).is_file())
        .cloned()
        .unwrap_or_else(|| {
            log::warn!("No symbol tables found; the catalog will be empty");
            PathBuf::from("resources")
        })
}

/// Loads every table under `dir` and builds the catalog. Never fails.
pub fn load_catalog(dir: &Path) -> SymbolCatalog {
    let (symbols, releases) = or_empty(load_layerset(&dir.join(LAYERSET_FILE)));
    let tables = CatalogTables {
        symbols,
        releases,
        categories: or_empty(load_categories(&dir.join(CATEGORIES_FILE))),
        category_map: or_empty(load_string_lists(&dir.join(SYMBOL_CATEGORIES_FILE))),
        keyword_map: or_empty(load_string_lists(&dir.join(SYMBOL_SEARCH_FILE))),
        alias_map: or_empty(load_aliases(&dir.join(NAME_ALIASES_FILE))),
    };

    let catalog = SymbolCatalog::from_tables(tables);
    log::info!(
        "Loaded {} symbols in {} categories from {}",
        catalog.len(),
        catalog.categories().len(),
        dir.display()
    );
    catalog
}

fn or_empty<T: Default>(result: Result<T, CatalogError>) -> T {
    result.unwrap_or_else(|e| {
        log::warn!("{}", e);
        T::default()
    })
}

fn read_plist(path: &Path) -> Result<Value, CatalogError> {
    let bytes = fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Value::from_reader(std::io::Cursor::new(bytes)).map_err(|source| CatalogError::Plist {
        path: path.to_path_buf(),
        source,
    })
}

fn shape(path: &Path, message: &str) -> CatalogError {
    CatalogError::Shape {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}

/// Symbol list and release map from the layerset availability table.
///
/// Every key of the `symbols` dictionary is a symbol; its `hierarchical`
/// entry, when present, is the release tag.
pub fn load_layerset(
    path: &Path,
) -> Result<(Vec<String>, HashMap<String, ReleaseTag>), CatalogError> {
    let root = read_plist(path)?;
    let symbols = root
        .as_dictionary()
        .and_then(|d| d.get("symbols"))
        .and_then(Value::as_dictionary)
        .ok_or_else(|| shape(path, "missing `symbols` dictionary"))?;

    let mut names = Vec::with_capacity(symbols.len());
    let mut releases = HashMap::new();
    for (name, entry) in symbols {
        names.push(name.clone());
        let tag = entry
            .as_dictionary()
            .and_then(|d| d.get("hierarchical"))
            .and_then(Value::as_string);
        if let Some(tag) = tag {
            releases.insert(name.clone(), ReleaseTag::parse(tag));
        }
    }
    Ok((names, releases))
}

/// Ordered category list. Entries lacking any of `icon`, `key` or `label`
/// are skipped.
pub fn load_categories(path: &Path) -> Result<Vec<Category>, CatalogError> {
    let root = read_plist(path)?;
    let entries = root
        .as_array()
        .ok_or_else(|| shape(path, "expected an array of categories"))?;

    let mut categories = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let field = |name: &str| {
            entry
                .as_dictionary()
                .and_then(|d| d.get(name))
                .and_then(Value::as_string)
        };
        match (field("icon"), field("key"), field("label")) {
            (Some(icon), Some(key), Some(label)) => {
                categories.push(Category::new(icon, key, label));
            }
            _ => log::warn!("{}: skipping malformed category #{}", path.display(), i),
        }
    }
    Ok(categories)
}

/// A `name → [string]` dictionary (category memberships, search keywords).
pub fn load_string_lists(path: &Path) -> Result<HashMap<String, Vec<String>>, CatalogError> {
    let root = read_plist(path)?;
    let dict = root
        .as_dictionary()
        .ok_or_else(|| shape(path, "expected a dictionary"))?;

    let mut map = HashMap::with_capacity(dict.len());
    for (name, value) in dict {
        let Some(items) = value.as_array() else {
            log::debug!("{}: `{}` is not an array", path.display(), name);
            continue;
        };
        let strings = items
            .iter()
            .filter_map(Value::as_string)
            .map(str::to_string)
            .collect();
        map.insert(name.clone(), strings);
    }
    Ok(map)
}

/// Alias table inverted to `canonical → [alias]`, each list sorted.
///
/// The file may be a property list (XML or binary) or an OpenStep strings
/// file in UTF-8 or UTF-16 with a byte-order mark.
pub fn load_aliases(path: &Path) -> Result<HashMap<String, Vec<String>>, CatalogError> {
    let bytes = fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pairs = match Value::from_reader(std::io::Cursor::new(&bytes)) {
        Ok(Value::Dictionary(dict)) => dict
            .into_iter()
            .filter_map(|(alias, canonical)| Some((alias, canonical.into_string()?)))
            .collect(),
        _ => {
            let text = decode_text(&bytes).ok_or_else(|| CatalogError::Strings {
                path: path.to_path_buf(),
                line: 1,
                message: "not UTF-8 or UTF-16 text".to_string(),
            })?;
            parse_strings(&text).map_err(|e| CatalogError::Strings {
                path: path.to_path_buf(),
                line: e.line,
                message: e.message,
            })?
        }
    };

    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for (alias, canonical) in pairs {
        map.entry(canonical).or_default().push(alias);
    }
    for aliases in map.values_mut() {
        aliases.sort_unstable();
        aliases.dedup();
    }
    Ok(map)
}

/// Decodes UTF-16 (LE or BE, with BOM) or UTF-8 (BOM optional) text.
fn decode_text(bytes: &[u8]) -> Option<String> {
    let utf16 = |units: Vec<u16>| String::from_utf16(&units).ok();
    match bytes {
        [0xFF, 0xFE, rest @ ..] => utf16(
            rest.chunks_exact(2)
                .map(|c| u16::from_le_bytes([c[0], c[1]]))
                .collect(),
        ),
        [0xFE, 0xFF, rest @ ..] => utf16(
            rest.chunks_exact(2)
                .map(|c| u16::from_be_bytes([c[0], c[1]]))
                .collect(),
        ),
        [0xEF, 0xBB, 0xBF, rest @ ..] => String::from_utf8(rest.to_vec()).ok(),
        _ => String::from_utf8(bytes.to_vec()).ok(),
    }
}
