//! Input handling module.
//!
//! - hotkeys.rs: global hotkey backend and event handler

pub mod hotkeys;

pub use hotkeys::{install_hotkey_handler, GlobalHotkeyBackend};
