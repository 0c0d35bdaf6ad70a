//! Global access to the application event bus.
//!
//! Tray, menu and hotkey handlers are `'static` closures installed into
//! third-party crates, so they reach the bus through this module instead of
//! carrying a handle. The bus is initialized once at startup via
//! `init_event_bus()`.
//!
//! - `Sender` is stored in `OnceLock` - it's `Send + Sync`
//! - `Receiver` is stored in `Mutex` - only drained from the UI thread

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::types::AppEvent;

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus. Later calls are no-ops.
pub fn init_event_bus() {
    RECEIVER.get_or_init(|| {
        let (sender, receiver) = mpsc::channel();
        // Only this closure ever sets SENDER, and it runs once.
        let _ = SENDER.set(sender);
        Mutex::new(receiver)
    });
}

/// Publish an event to the global event bus.
///
/// Events published before `init_event_bus()` are dropped with a warning.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            // Ignore send errors - receiver dropped means app is shutting down
            let _ = sender.send(event);
        }
        None => log::warn!("Event bus not initialized; dropping {:?}", event),
    }
}

/// Drain all pending events from the global event bus.
///
/// Returns nothing if the bus was never initialized.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let receiver = match receiver.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
