//! macOS-specific implementation using AppKit via objc2, egui for drawing.
//!
//! This module contains all macOS-specific code:
//! - FFI glue to AppKit / Foundation
//! - UI components (status item, browser popover, settings window, glyphs)
//! - Input handling (global hotkey backend)
//! - Storage (NSUserDefaults persistence)
//! - The event dispatcher that executes status commands

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

// Re-export commonly used items
pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
