//! User preferences (pure Rust, no FFI).
//!
//! This module defines the preference structure that is persisted to
//! NSUserDefaults by the platform layer.

use super::constants::*;
use crate::hotkey::HotkeyCombination;

/// Complete preference set, serializable to/from NSUserDefaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Show the symbol name under each glyph.
    pub show_symbol_names: bool,
    /// Glyph size in points.
    pub icon_size: f64,
    /// Global hotkey combination, e.g. `Cmd+Shift+T`.
    pub hotkey: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            show_symbol_names: DEFAULT_SHOW_NAMES,
            icon_size: DEFAULT_ICON_SIZE,
            hotkey: DEFAULT_HOTKEY.to_string(),
        }
    }
}

impl Preferences {
    /// Validates and repairs all values.
    ///
    /// The icon size is clamped to its limits (NaN falls back to the default)
    /// and an unparsable hotkey is replaced by the default one. Valid hotkeys
    /// are rewritten in canonical form.
    pub fn validate(&mut self) {
        self.icon_size = if self.icon_size.is_nan() {
            DEFAULT_ICON_SIZE
        } else {
            self.icon_size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
        };
        self.hotkey = match self.hotkey.parse::<HotkeyCombination>() {
            Ok(combo) => combo.to_string(),
            Err(e) => {
                log::warn!("Ignoring stored hotkey {:?}: {}", self.hotkey, e);
                DEFAULT_HOTKEY.to_string()
            }
        };
    }

    /// The parsed hotkey, falling back to the default combination.
    pub fn hotkey_combination(&self) -> HotkeyCombination {
        self.hotkey
            .parse()
            .unwrap_or_else(|_| HotkeyCombination::default_combination())
    }
}
