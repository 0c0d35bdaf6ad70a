//! UI module for macOS.
//!
//! This module contains all UI components:
//! - status_bar: menu bar item and its context menu
//! - popover: the root window hosting the browser
//! - browser_view: sidebar, search field, symbol grid and toast
//! - settings_view: the settings window
//! - glyphs: SF Symbol rasterization

pub mod browser_view;
pub mod glyphs;
pub mod popover;
pub mod settings_view;
pub mod status_bar;

pub use browser_view::{BrowserOutcome, BrowserView};
pub use popover::Popover;
pub use settings_view::{SettingsOutcome, SettingsWindow};
pub use status_bar::{install_status_bar, StatusItem};
