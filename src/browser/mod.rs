//! Browsing view state, independent of any UI toolkit.
//!
//! The presenter renders [`BrowserState`] and reports clicks and key presses
//! back; all focus and selection rules live here.

pub mod keys;
pub mod state;

pub use keys::{Key, KeyEvent, KeyModifiers};
pub use state::{BrowserState, FocusRegion, KeyAction};
