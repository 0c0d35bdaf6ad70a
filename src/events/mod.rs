//! Event system for decoupled inter-module communication.
//!
//! Producers that live outside the UI frame (tray icon clicks, context menu
//! items, the global hotkey) publish events; the UI thread drains them once
//! per frame and feeds them to the status controller.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tray icon  │     │ Context menu│     │   Hotkey    │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                 global event bus                    │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ drain()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │            Dispatcher (UI thread, per frame)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`global`]: The static channel and its access functions

pub mod global;
pub mod types;

pub use global::{drain_events, init_event_bus, publish};
pub use types::{AppEvent, StatusClick};
