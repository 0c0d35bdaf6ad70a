#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Menu-bar SF Symbols browser.
//!
//! Everything outside `platform` is pure Rust with no FFI so it can be
//! tested on any host: the catalog and its filter, the browsing state and
//! keyboard router, the toast, the status/popover controller, the hotkey
//! contract, the login item, preferences and the event bus.

pub mod browser;
pub mod catalog;
pub mod clipboard;
pub mod error;
pub mod events;
pub mod hotkey;
pub mod logging;
pub mod login_item;
pub mod model;
pub mod status;
pub mod toast;

#[cfg(target_os = "macos")]
pub mod platform;

// Re-export the types most callers need
pub use browser::{BrowserState, FocusRegion, Key, KeyAction, KeyEvent, KeyModifiers};
pub use catalog::{filter, filter_indices, load_catalog, CatalogTables, SymbolCatalog};
pub use clipboard::{copy_symbol, Clipboard, MemoryClipboard};
pub use error::{CatalogError, ClipboardError, HotkeyError, LoginItemError};
pub use events::{AppEvent, StatusClick};
pub use hotkey::{HotkeyBackend, HotkeyCombination, HotkeyManager, HotkeyModifiers};
pub use login_item::{LoginItem, LoginItemBackend};
pub use model::{Category, Preferences, ReleaseTag, SymbolInfo};
pub use status::{HostState, PopoverState, StatusCommand, StatusController};
pub use toast::ToastState;
