//! Application entry point.
//!
//! Initializes logging and the event bus, then hands control to the
//! platform run loop.

#[cfg(target_os = "macos")]
mod macos_main;

use std::process::ExitCode;

use symbolbar::events::init_event_bus;
use symbolbar::logging;

fn main() -> ExitCode {
    if std::env::args()
        .skip(1)
        .any(|a| a == "--version" || a == "-V")
    {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    logging::init();

    // Initialize event bus before anything else publishes
    init_event_bus();

    run()
}

#[cfg(target_os = "macos")]
fn run() -> ExitCode {
    match macos_main::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("UI runtime failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "macos"))]
fn run() -> ExitCode {
    log::error!(
        "{} only runs on macOS (this is {})",
        env!("CARGO_PKG_NAME"),
        std::env::consts::OS
    );
    ExitCode::FAILURE
}
