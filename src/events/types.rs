//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Mouse button that clicked the status item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClick {
    Left,
    Right,
}

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (tray icon, context menu, hotkey, UI) through
/// the global event bus to the dispatcher, which runs on the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input Events ===
    /// The status item was clicked.
    StatusItemClicked(StatusClick),

    /// A global hotkey fired; `id` is matched against the active binding.
    HotkeyPressed { id: u32 },

    /// Open (or focus) the settings window.
    OpenSettings,

    /// Show the About panel.
    ShowAbout,

    /// Terminate the application.
    Quit,

    // === UI Lifecycle Events ===
    /// The popover was dismissed by the UI (focus lost, Escape).
    PopoverDismissed,

    /// The settings window with this token was closed by the user.
    SettingsClosed { token: u64 },

    /// The user picked a new hotkey combination in settings.
    HotkeyChanged(String),

    /// The user flipped "Launch at login" in settings.
    LaunchAtLoginChanged(bool),
}

impl AppEvent {
    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::StatusItemClicked(StatusClick::Left) => "Status item left click",
            AppEvent::StatusItemClicked(StatusClick::Right) => "Status item right click",
            AppEvent::HotkeyPressed { .. } => "Global hotkey pressed",
            AppEvent::OpenSettings => "Open settings window",
            AppEvent::ShowAbout => "Show about panel",
            AppEvent::Quit => "Quit application",
            AppEvent::PopoverDismissed => "Popover dismissed",
            AppEvent::SettingsClosed { .. } => "Settings window closed",
            AppEvent::HotkeyChanged(_) => "Hotkey changed",
            AppEvent::LaunchAtLoginChanged(_) => "Launch at login changed",
        }
    }
}
