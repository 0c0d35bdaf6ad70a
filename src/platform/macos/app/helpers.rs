//! Global application helpers.
//!
//! Small wrappers around `NSApplication` used by the dispatcher. All of them
//! are no-ops off the main thread.

use objc2::MainThreadMarker;
use objc2_app_kit::NSApplication;

use crate::platform::macos::ffi::bridge::Retained;

fn shared_app() -> Option<Retained<NSApplication>> {
    MainThreadMarker::new().map(NSApplication::sharedApplication)
}

/// Returns true if this app is the frontmost application.
pub fn is_app_active() -> bool {
    shared_app().is_some_and(|app| app.isActive())
}

/// Brings the app to the front.
pub fn activate_app() {
    if let Some(app) = shared_app() {
        #[allow(deprecated)]
        app.activateIgnoringOtherApps(true);
    }
}

/// Shows the standard About panel.
pub fn show_about_panel() {
    if let Some(app) = shared_app() {
        activate_app();
        unsafe { app.orderFrontStandardAboutPanel(None) };
    }
}
