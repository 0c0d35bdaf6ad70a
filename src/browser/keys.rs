//! Toolkit-independent key events fed to the focus router.

/// Keys the router reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Enter,
    Space,
    Escape,
    /// A typed character.
    Char(char),
}

/// Modifier state at the time of the key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub command: bool,
    pub shift: bool,
    pub option: bool,
    pub control: bool,
}

impl KeyModifiers {
    pub const NONE: Self = Self {
        command: false,
        shift: false,
        option: false,
        control: false,
    };

    pub const COMMAND: Self = Self {
        command: true,
        shift: false,
        option: false,
        control: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, KeyModifiers::NONE)
    }

    /// Command + `key`.
    pub fn command(key: Key) -> Self {
        Self::new(key, KeyModifiers::COMMAND)
    }

    /// True for Cmd+C.
    pub fn is_copy_shortcut(&self) -> bool {
        self.modifiers.command && matches!(self.key, Key::Char('c') | Key::Char('C'))
    }

    /// The typed character when it is alphanumeric and Command is not held.
    pub fn search_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if c.is_alphanumeric() && !self.modifiers.command => Some(c),
            _ => None,
        }
    }
}
