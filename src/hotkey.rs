//! Global hotkey contract.
//!
//! The app owns exactly one system-wide shortcut. The platform facility that
//! actually grabs the key lives behind [`HotkeyBackend`]; [`HotkeyManager`]
//! enforces the single-binding rule and turns backend failures into a logged,
//! inactive hotkey instead of an error.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

use crate::error::HotkeyError;
use crate::model::constants::DEFAULT_HOTKEY;

/// Modifier mask for a hotkey.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HotkeyModifiers(u8);

impl HotkeyModifiers {
    pub const NONE: Self = Self(0);
    pub const COMMAND: Self = Self(1);
    pub const SHIFT: Self = Self(1 << 1);
    pub const OPTION: Self = Self(1 << 2);
    pub const CONTROL: Self = Self(1 << 3);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for HotkeyModifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Display order and accepted spellings of each modifier.
const MODIFIER_NAMES: [(HotkeyModifiers, &str, &[&str]); 4] = [
    (HotkeyModifiers::COMMAND, "Cmd", &["cmd", "command", "super", "meta"]),
    (HotkeyModifiers::CONTROL, "Ctrl", &["ctrl", "control"]),
    (HotkeyModifiers::OPTION, "Opt", &["opt", "option", "alt"]),
    (HotkeyModifiers::SHIFT, "Shift", &["shift"]),
];

/// Punctuation keys: (typed character, key code).
const PUNCTUATION: [(char, &str); 11] = [
    (',', "Comma"),
    ('.', "Period"),
    ('/', "Slash"),
    (';', "Semicolon"),
    ('\'', "Quote"),
    ('[', "BracketLeft"),
    (']', "BracketRight"),
    ('-', "Minus"),
    ('=', "Equal"),
    ('`', "Backquote"),
    ('\\', "Backslash"),
];

const NAMED_KEYS: [(&str, &[&str]); 4] = [
    ("Space", &["space"]),
    ("Enter", &["enter", "return"]),
    ("Tab", &["tab"]),
    ("Escape", &["escape", "esc"]),
];

/// A key + modifier combination, e.g. `Cmd+Shift+T`.
///
/// The key is stored as a W3C `KeyboardEvent.code` name (`KeyT`, `Digit1`,
/// `F5`, `Comma`, ...), which is what the platform shortcut crates consume.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotkeyCombination {
    code: String,
    modifiers: HotkeyModifiers,
}

impl HotkeyCombination {
    /// Builds a combination from a key code and modifiers.
    pub fn new(code: &str, modifiers: HotkeyModifiers) -> Result<Self, HotkeyError> {
        if modifiers.is_empty() {
            return Err(HotkeyError::MissingModifier);
        }
        let code = normalize_key(code)?;
        Ok(Self { code, modifiers })
    }

    /// Cmd+Shift+T.
    pub fn default_combination() -> Self {
        Self {
            code: "KeyT".to_string(),
            modifiers: HotkeyModifiers::COMMAND | HotkeyModifiers::SHIFT,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn modifiers(&self) -> HotkeyModifiers {
        self.modifiers
    }

    fn key_label(&self) -> String {
        if let Some(letter) = self.code.strip_prefix("Key") {
            return letter.to_string();
        }
        if let Some(digit) = self.code.strip_prefix("Digit") {
            return digit.to_string();
        }
        if let Some((ch, _)) = PUNCTUATION.iter().find(|(_, code)| *code == self.code) {
            return ch.to_string();
        }
        self.code.clone()
    }
}

impl Default for HotkeyCombination {
    fn default() -> Self {
        Self::default_combination()
    }
}

impl fmt::Display for HotkeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name, _) in MODIFIER_NAMES {
            if self.modifiers.contains(flag) {
                write!(f, "{}+", name)?;
            }
        }
        f.write_str(&self.key_label())
    }
}

impl FromStr for HotkeyCombination {
    type Err = HotkeyError;

    /// Parses `Cmd+Shift+T`, `ctrl+alt+KeyK`, `Cmd+Opt+F5`, ... Modifier
    /// names are case-insensitive; the last token is the key.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyError::Empty);
        }
        let tokens: Vec<&str> = s.split('+').map(str::trim).collect();
        let (key, mods) = tokens.split_last().ok_or(HotkeyError::Empty)?;
        if key.is_empty() {
            return Err(HotkeyError::Empty);
        }

        let mut modifiers = HotkeyModifiers::NONE;
        for token in mods {
            let lower = token.to_ascii_lowercase();
            let flag = MODIFIER_NAMES
                .iter()
                .find(|(_, _, aliases)| aliases.contains(&lower.as_str()))
                .map(|(flag, _, _)| *flag)
                .ok_or_else(|| HotkeyError::UnknownModifier(token.to_string()))?;
            modifiers = modifiers | flag;
        }

        Self::new(key, modifiers)
    }
}

/// Maps a typed key name to its key code.
fn normalize_key(key: &str) -> Result<String, HotkeyError> {
    let unsupported = || HotkeyError::UnsupportedKey(key.to_string());

    let mut chars = key.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_ascii_alphabetic() {
            return Ok(format!("Key{}", ch.to_ascii_uppercase()));
        }
        if ch.is_ascii_digit() {
            return Ok(format!("Digit{}", ch));
        }
        return PUNCTUATION
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|(_, code)| code.to_string())
            .ok_or_else(unsupported);
    }

    let lower = key.to_ascii_lowercase();
    if let Some(rest) = lower.strip_prefix("key") {
        if rest.len() == 1 && rest.chars().all(|c| c.is_ascii_alphabetic()) {
            return Ok(format!("Key{}", rest.to_ascii_uppercase()));
        }
    }
    if let Some(rest) = lower.strip_prefix("digit") {
        if rest.len() == 1 && rest.chars().all(|c| c.is_ascii_digit()) {
            return Ok(format!("Digit{}", rest));
        }
    }
    if let Some(rest) = lower.strip_prefix('f') {
        if let Ok(n) = rest.parse::<u8>() {
            if (1..=20).contains(&n) {
                return Ok(format!("F{}", n));
            }
        }
    }
    if let Some((code, _)) = NAMED_KEYS.iter().find(|(_, names)| names.contains(&lower.as_str())) {
        return Ok(code.to_string());
    }
    if let Some((_, code)) = PUNCTUATION.iter().find(|(_, code)| code.eq_ignore_ascii_case(key)) {
        return Ok(code.to_string());
    }
    Err(unsupported())
}

/// Platform facility that grabs one system-wide shortcut.
///
/// `register` returns the identifier that fired events will carry.
pub trait HotkeyBackend {
    fn register(&mut self, combo: &HotkeyCombination) -> Result<u32, HotkeyError>;
    fn unregister(&mut self, combo: &HotkeyCombination, id: u32) -> Result<(), HotkeyError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveHotkey {
    combo: HotkeyCombination,
    id: u32,
}

/// Keeps at most one hotkey registered with the backend.
pub struct HotkeyManager<B: HotkeyBackend> {
    backend: B,
    active: Option<ActiveHotkey>,
}

impl<B: HotkeyBackend> HotkeyManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: None,
        }
    }

    /// Registers `combo`, unregistering any previous binding first.
    ///
    /// Returns `false` (and logs) when the backend refuses; the hotkey is then
    /// inactive until the next successful registration.
    pub fn register(&mut self, combo: &HotkeyCombination) -> bool {
        self.unregister();
        match self.backend.register(combo) {
            Ok(id) => {
                log::info!("Registered global hotkey {}", combo);
                self.active = Some(ActiveHotkey {
                    combo: combo.clone(),
                    id,
                });
                true
            }
            Err(e) => {
                log::warn!("Global hotkey {} unavailable: {}", combo, e);
                false
            }
        }
    }

    /// Parses `text` and binds it in place of the active hotkey.
    ///
    /// Unparseable text leaves the binding untouched. If the backend refuses
    /// the new combination, the previous one is registered again.
    pub fn rebind(&mut self, text: &str) -> Result<HotkeyCombination, HotkeyError> {
        let combo = text.parse::<HotkeyCombination>()?;
        let previous = self.active().cloned();
        if self.register(&combo) {
            return Ok(combo);
        }
        if let Some(previous) = previous {
            self.register(&previous);
        }
        Err(HotkeyError::Unavailable(combo.to_string()))
    }

    /// Drops the current binding, if any. Safe to call repeatedly.
    pub fn unregister(&mut self) {
        if let Some(active) = self.active.take() {
            if let Err(e) = self.backend.unregister(&active.combo, active.id) {
                log::warn!("Failed to unregister hotkey {}: {}", active.combo, e);
            }
        }
    }

    /// The currently bound combination.
    pub fn active(&self) -> Option<&HotkeyCombination> {
        self.active.as_ref().map(|a| &a.combo)
    }

    /// True if a fired event with this identifier belongs to the active binding.
    pub fn is_bound(&self, id: u32) -> bool {
        self.active.as_ref().is_some_and(|a| a.id == id)
    }
}

impl<B: HotkeyBackend> Drop for HotkeyManager<B> {
    fn drop(&mut self) {
        self.unregister();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_combination_matches_constant() {
        assert_eq!(HotkeyCombination::default().to_string(), DEFAULT_HOTKEY);
    }

    #[test]
    fn single_char_keys() {
        assert_eq!(normalize_key("t").unwrap(), "KeyT");
        assert_eq!(normalize_key("7").unwrap(), "Digit7");
        assert_eq!(normalize_key(",").unwrap(), "Comma");
        assert!(normalize_key("é").is_err());
    }

    #[test]
    fn code_names_are_normalized() {
        assert_eq!(normalize_key("keyq").unwrap(), "KeyQ");
        assert_eq!(normalize_key("DIGIT0").unwrap(), "Digit0");
        assert_eq!(normalize_key("f12").unwrap(), "F12");
        assert_eq!(normalize_key("Return").unwrap(), "Enter");
        assert_eq!(normalize_key("slash").unwrap(), "Slash");
    }

    #[test]
    fn function_key_range() {
        assert!(normalize_key("F0").is_err());
        assert!(normalize_key("F21").is_err());
    }
}
