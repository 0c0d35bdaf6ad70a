//! Platform-specific implementations.
//!
//! Only macOS is supported. The platform module contains:
//! - FFI glue (objc2 bridge helpers)
//! - UI components (status item, popover browser, settings window)
//! - Input handling (global hotkey)
//! - Storage (NSUserDefaults persistence)

#[cfg(target_os = "macos")]
pub mod macos;

// Re-export the current platform's modules for convenience
#[cfg(target_os = "macos")]
pub use macos::*;
