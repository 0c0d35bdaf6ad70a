//! Configuration constants and default values.
//!
//! This module contains the fixed category keys, bundled resource names,
//! NSUserDefaults keys, browsing defaults and validation limits.

use std::time::Duration;

// === Synthetic Categories ===

/// Category key that applies no category restriction.
pub const CATEGORY_ALL: &str = "all";

/// Category key that keeps only symbols from the two latest releases.
pub const CATEGORY_WHATS_NEW: &str = "whatsnew";

/// Number of distinct release tags considered "new".
pub const WHATS_NEW_RELEASES: usize = 2;

// === Bundled Resources ===

/// Symbol → release availability table (also the master symbol list).
pub const LAYERSET_FILE: &str = "layerset_availability.plist";

/// Ordered category list.
pub const CATEGORIES_FILE: &str = "categories.plist";

/// Symbol → category keys.
pub const SYMBOL_CATEGORIES_FILE: &str = "symbol_categories.plist";

/// Symbol → search keywords.
pub const SYMBOL_SEARCH_FILE: &str = "symbol_search.plist";

/// Alias → canonical name (inverted at load time).
pub const NAME_ALIASES_FILE: &str = "name_aliases.strings";

/// System bundle that ships the same tables.
pub const CORE_GLYPHS_RESOURCES: &str =
    "/System/Library/CoreServices/CoreGlyphs.bundle/Contents/Resources";

/// Environment variable overriding the resource directory.
pub const ENV_RESOURCES: &str = "SYMBOLBAR_RESOURCES";

/// Environment variable holding the log level filter.
pub const ENV_LOG: &str = "SYMBOLBAR_LOG";

// === Browser Defaults ===

/// Columns in the symbol grid.
pub const GRID_COLUMNS: usize = 4;

/// How long the "Copied" toast stays up.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Popover size in points (width, height).
pub const POPOVER_SIZE: (f32, f32) = (560.0, 420.0);

/// Settings window size in points (width, height).
pub const SETTINGS_SIZE: (f32, f32) = (380.0, 220.0);

// === NSUserDefaults Keys ===

/// Key for the "show symbol names" preference.
pub const PREF_SHOW_NAMES: &str = "showSymbolNames";

/// Key for the default icon size preference.
pub const PREF_ICON_SIZE: &str = "defaultIconSize";

/// Key for the global hotkey combination.
pub const PREF_HOTKEY: &str = "hotkey";

// === Preference Defaults ===

/// Symbol names are shown under each glyph by default.
pub const DEFAULT_SHOW_NAMES: bool = true;

/// Default glyph size in points.
pub const DEFAULT_ICON_SIZE: f64 = 28.0;

/// Default global hotkey (Cmd+Shift+T).
pub const DEFAULT_HOTKEY: &str = "Cmd+Shift+T";

// === Validation Limits ===

/// Minimum glyph size in points.
pub const MIN_ICON_SIZE: f64 = 16.0;

/// Maximum glyph size in points.
pub const MAX_ICON_SIZE: f64 = 64.0;

/// Icon size slider step in points.
pub const ICON_SIZE_STEP: f64 = 2.0;
