//! The symbol catalog: every bundled lookup table, loaded once.
//!
//! The catalog is built at startup and passed by reference to whoever needs
//! it. It never changes afterwards.

pub mod filter;
pub mod loader;
pub mod strings;

use std::collections::{BTreeSet, HashMap};

use crate::model::{Category, ReleaseTag, SymbolInfo, WHATS_NEW_RELEASES};

pub use filter::{filter, filter_indices};
pub use loader::{default_resource_dir, load_catalog, resolve_resource_dir};

/// Raw lookup tables, as read from disk.
#[derive(Debug, Clone, Default)]
pub struct CatalogTables {
    pub symbols: Vec<String>,
    pub releases: HashMap<String, ReleaseTag>,
    pub categories: Vec<Category>,
    pub category_map: HashMap<String, Vec<String>>,
    pub keyword_map: HashMap<String, Vec<String>>,
    pub alias_map: HashMap<String, Vec<String>>,
}

/// Immutable, query-ready symbol dataset.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    tables: CatalogTables,
    latest_releases: Vec<ReleaseTag>,
}

impl SymbolCatalog {
    /// Builds the catalog from raw tables.
    ///
    /// Symbols are sorted and deduplicated, the synthetic `all` and
    /// `whatsnew` categories are prepended when missing and the latest
    /// release tags are computed once.
    pub fn from_tables(mut tables: CatalogTables) -> Self {
        tables.symbols.sort_unstable();
        tables.symbols.dedup();

        let mut leading = Vec::new();
        for synthetic in [Category::all(), Category::whats_new()] {
            if !tables.categories.iter().any(|c| c.key == synthetic.key) {
                leading.push(synthetic);
            }
        }
        if !leading.is_empty() {
            leading.append(&mut tables.categories);
            tables.categories = leading;
        }

        let distinct: BTreeSet<ReleaseTag> = tables.releases.values().copied().collect();
        let latest_releases = distinct.into_iter().rev().take(WHATS_NEW_RELEASES).collect();

        Self {
            tables,
            latest_releases,
        }
    }

    /// Every symbol name, sorted.
    pub fn symbols(&self) -> &[String] {
        &self.tables.symbols
    }

    /// Sidebar categories in display order.
    pub fn categories(&self) -> &[Category] {
        &self.tables.categories
    }

    pub fn category(&self, key: &str) -> Option<&Category> {
        self.tables.categories.iter().find(|c| c.key == key)
    }

    /// The most recent distinct release tags, newest first.
    pub fn latest_releases(&self) -> &[ReleaseTag] {
        &self.latest_releases
    }

    pub fn release(&self, name: &str) -> Option<ReleaseTag> {
        self.tables.releases.get(name).copied()
    }

    pub fn categories_of(&self, name: &str) -> &[String] {
        lookup(&self.tables.category_map, name)
    }

    pub fn keywords_of(&self, name: &str) -> &[String] {
        lookup(&self.tables.keyword_map, name)
    }

    pub fn aliases_of(&self, name: &str) -> &[String] {
        lookup(&self.tables.alias_map, name)
    }

    /// Everything known about `name`, if it is a catalog symbol.
    pub fn symbol(&self, name: &str) -> Option<SymbolInfo<'_>> {
        let index = self
            .tables
            .symbols
            .binary_search_by(|s| s.as_str().cmp(name))
            .ok()?;
        let name = self.tables.symbols[index].as_str();
        Some(SymbolInfo {
            name,
            release: self.release(name),
            categories: self.categories_of(name),
            keywords: self.keywords_of(name),
            aliases: self.aliases_of(name),
        })
    }

    pub fn len(&self) -> usize {
        self.tables.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.symbols.is_empty()
    }
}

fn lookup<'a>(map: &'a HashMap<String, Vec<String>>, name: &str) -> &'a [String] {
    map.get(name).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CATEGORY_ALL, CATEGORY_WHATS_NEW};

    fn tables() -> CatalogTables {
        CatalogTables {
            symbols: vec!["b".into(), "a".into(), "b".into()],
            releases: HashMap::from([
                ("a".to_string(), ReleaseTag::new(2019, 0)),
                ("b".to_string(), ReleaseTag::new(2023, 0)),
                ("c".to_string(), ReleaseTag::new(2024, 1)),
                ("d".to_string(), ReleaseTag::new(2023, 0)),
            ]),
            categories: vec![Category::new("cloud", "weather", "Weather")],
            ..Default::default()
        }
    }

    #[test]
    fn symbols_sorted_and_deduplicated() {
        let catalog = SymbolCatalog::from_tables(tables());
        assert_eq!(catalog.symbols(), ["a", "b"]);
    }

    #[test]
    fn synthetic_categories_prepended() {
        let catalog = SymbolCatalog::from_tables(tables());
        let keys: Vec<&str> = catalog.categories().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, [CATEGORY_ALL, CATEGORY_WHATS_NEW, "weather"]);
    }

    #[test]
    fn existing_synthetic_categories_kept_in_place() {
        let mut t = tables();
        t.categories = vec![
            Category::new("x", "weather", "Weather"),
            Category::new("y", CATEGORY_ALL, "Everything"),
            Category::new("z", CATEGORY_WHATS_NEW, "New"),
        ];
        let catalog = SymbolCatalog::from_tables(t);
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.categories()[1].label, "Everything");
    }

    #[test]
    fn latest_releases_are_distinct_and_newest_first() {
        let catalog = SymbolCatalog::from_tables(tables());
        assert_eq!(
            catalog.latest_releases(),
            [ReleaseTag::new(2024, 1), ReleaseTag::new(2023, 0)]
        );
    }

    #[test]
    fn symbol_info_lookup() {
        let catalog = SymbolCatalog::from_tables(tables());
        let info = catalog.symbol("b").unwrap();
        assert_eq!(info.release, Some(ReleaseTag::new(2023, 0)));
        assert!(info.keywords.is_empty());
        assert!(catalog.symbol("zzz").is_none());
    }
}
