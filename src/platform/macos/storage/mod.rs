//! Storage for macOS using NSUserDefaults.
//!
//! Persists user preferences to the macOS preferences system.

pub mod preferences;

pub use preferences::*;
