//! Category + free-text filtering over the catalog.

use super::SymbolCatalog;
use crate::model::{CATEGORY_ALL, CATEGORY_WHATS_NEW};

/// Indices into `catalog.symbols()` matching `category` and `query`, in
/// catalog order.
///
/// `all` applies no category restriction, `whatsnew` keeps symbols from the
/// latest releases and any other key keeps the category's members. A
/// non-empty query must appear, case-insensitively, in the name, a keyword
/// or an alias.
pub fn filter_indices(catalog: &SymbolCatalog, category: &str, query: &str) -> Vec<usize> {
    let needle = query.to_lowercase();
    let contains = |text: &str| text.to_lowercase().contains(&needle);

    catalog
        .symbols()
        .iter()
        .enumerate()
        .filter(|(_, name)| match category {
            CATEGORY_ALL => true,
            CATEGORY_WHATS_NEW => catalog
                .release(name)
                .is_some_and(|tag| catalog.latest_releases().contains(&tag)),
            key => catalog.categories_of(name).iter().any(|k| k == key),
        })
        .filter(|(_, name)| {
            needle.is_empty()
                || contains(name)
                || catalog.keywords_of(name).iter().any(|k| contains(k))
                || catalog.aliases_of(name).iter().any(|a| contains(a))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Names of the symbols selected by [`filter_indices`].
pub fn filter<'a>(catalog: &'a SymbolCatalog, category: &str, query: &str) -> Vec<&'a str> {
    let symbols = catalog.symbols();
    filter_indices(catalog, category, query)
        .into_iter()
        .map(|i| symbols[i].as_str())
        .collect()
}
