//! Application domain model.
//!
//! This module contains pure types (no FFI dependencies): symbol metadata,
//! user preferences and configuration constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod constants;
pub mod preferences;
pub mod symbol;

pub use constants::*;
pub use preferences::Preferences;
pub use symbol::{Category, ReleaseTag, SymbolInfo};
