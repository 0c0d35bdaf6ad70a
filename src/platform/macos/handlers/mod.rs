//! Event handlers for macOS.
//!
//! - dispatcher: drains the event bus once per frame and executes the
//!   resulting status commands

pub mod dispatcher;

pub use dispatcher::{AppWindows, Dispatcher};
