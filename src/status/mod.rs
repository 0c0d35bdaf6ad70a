//! Status item and popover controller.

pub mod controller;

pub use controller::{HostState, PopoverState, StatusCommand, StatusController};
