//! Symbol metadata types (pure Rust, no FFI).

use std::fmt;

use super::constants::{CATEGORY_ALL, CATEGORY_WHATS_NEW};

/// Release in which a symbol first shipped, e.g. `2024.1`.
///
/// Ordering is by year, then sub-version, so the most recent tag sorts last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReleaseTag {
    pub year: u32,
    pub sub: u32,
}

impl ReleaseTag {
    pub const fn new(year: u32, sub: u32) -> Self {
        Self { year, sub }
    }

    /// Parses `"2023"` or `"2024.1"`. Components that are not numbers read as 0.
    pub fn parse(s: &str) -> Self {
        let mut parts = s.trim().split('.');
        let year = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        let sub = parts.next().and_then(|p| p.parse().ok()).unwrap_or(0);
        Self { year, sub }
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.year, self.sub)
    }
}

/// A sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// SF Symbol name used as the sidebar glyph.
    pub icon: String,
    /// Unique key referenced by the symbol → category table.
    pub key: String,
    /// Display label.
    pub label: String,
}

impl Category {
    pub fn new(icon: impl Into<String>, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            key: key.into(),
            label: label.into(),
        }
    }

    /// The synthetic "All" category.
    pub fn all() -> Self {
        Self::new("square.grid.2x2", CATEGORY_ALL, "All")
    }

    /// The synthetic "What's New" category.
    pub fn whats_new() -> Self {
        Self::new("sparkles", CATEGORY_WHATS_NEW, "What's New")
    }
}

/// Borrowed view of everything known about one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolInfo<'a> {
    pub name: &'a str,
    pub release: Option<ReleaseTag>,
    pub categories: &'a [String],
    pub keywords: &'a [String],
    pub aliases: &'a [String],
}
