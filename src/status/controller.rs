//! Status item, popover and settings-window lifecycle.
//!
//! The controller is a plain state machine: it consumes [`AppEvent`]s and
//! answers with the [`StatusCommand`]s the platform layer must execute.

use crate::events::{AppEvent, StatusClick};

/// Popover visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PopoverState {
    #[default]
    Hidden,
    Shown,
}

/// Facts about the host the controller cannot track itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostState {
    /// The app is the frontmost application.
    pub app_active: bool,
    /// The current settings window is on screen.
    pub settings_visible: bool,
}

/// Side effects requested from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCommand {
    /// Show the popover under the status item, activating the app first if
    /// it is not frontmost.
    ShowPopover { activate_app: bool },
    HidePopover,
    /// Pop up the Settings… / About / Quit menu.
    ShowContextMenu,
    /// Create the settings window identified by `token`.
    CreateSettingsWindow { token: u64 },
    /// Bring the existing settings window to the front and activate the app.
    FocusSettingsWindow,
    /// Stop observing close notifications of the window with `token`.
    DetachSettingsObserver { token: u64 },
    ShowAbout,
    Quit,
}

#[derive(Debug, Default)]
pub struct StatusController {
    popover: PopoverState,
    settings: Option<u64>,
    next_token: u64,
}

impl StatusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn popover(&self) -> PopoverState {
        self.popover
    }

    /// Token of the live settings window, if one was created.
    pub fn settings_token(&self) -> Option<u64> {
        self.settings
    }

    /// Applies one event. `HotkeyPressed` must already be matched against the
    /// active binding.
    pub fn handle(&mut self, event: &AppEvent, host: HostState) -> Vec<StatusCommand> {
        match event {
            AppEvent::StatusItemClicked(StatusClick::Left) | AppEvent::HotkeyPressed { .. } => {
                vec![self.toggle(host)]
            }

            AppEvent::StatusItemClicked(StatusClick::Right) => {
                let mut commands = Vec::with_capacity(2);
                if self.popover == PopoverState::Shown {
                    self.popover = PopoverState::Hidden;
                    commands.push(StatusCommand::HidePopover);
                }
                commands.push(StatusCommand::ShowContextMenu);
                commands
            }

            AppEvent::PopoverDismissed => {
                self.popover = PopoverState::Hidden;
                Vec::new()
            }

            AppEvent::OpenSettings => self.open_settings(host),

            AppEvent::SettingsClosed { token } => {
                if self.settings == Some(*token) {
                    self.settings = None;
                    vec![StatusCommand::DetachSettingsObserver { token: *token }]
                } else {
                    log::debug!("Ignoring close of stale settings window {}", token);
                    Vec::new()
                }
            }

            AppEvent::ShowAbout => vec![StatusCommand::ShowAbout],
            AppEvent::Quit => vec![StatusCommand::Quit],
            AppEvent::HotkeyChanged(_) | AppEvent::LaunchAtLoginChanged(_) => Vec::new(),
        }
    }

    fn toggle(&mut self, host: HostState) -> StatusCommand {
        match self.popover {
            PopoverState::Shown => {
                self.popover = PopoverState::Hidden;
                StatusCommand::HidePopover
            }
            PopoverState::Hidden => {
                self.popover = PopoverState::Shown;
                StatusCommand::ShowPopover {
                    activate_app: !host.app_active,
                }
            }
        }
    }

    fn open_settings(&mut self, host: HostState) -> Vec<StatusCommand> {
        let mut commands = Vec::with_capacity(3);
        if let Some(token) = self.settings {
            if host.settings_visible {
                return vec![StatusCommand::FocusSettingsWindow];
            }
            commands.push(StatusCommand::DetachSettingsObserver { token });
        }

        self.next_token += 1;
        let token = self.next_token;
        self.settings = Some(token);
        commands.push(StatusCommand::CreateSettingsWindow { token });
        // A fresh window still has to come to the front
        commands.push(StatusCommand::FocusSettingsWindow);
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_unique() {
        let mut controller = StatusController::new();
        let host = HostState::default();
        controller.handle(&AppEvent::OpenSettings, host);
        let first = controller.settings_token().unwrap();
        controller.handle(&AppEvent::OpenSettings, host);
        assert_ne!(controller.settings_token(), Some(first));
    }

    #[test]
    fn settings_edits_are_not_status_events() {
        let mut controller = StatusController::new();
        assert!(controller
            .handle(&AppEvent::HotkeyChanged("Cmd+K".into()), HostState::default())
            .is_empty());
        assert!(controller
            .handle(&AppEvent::LaunchAtLoginChanged(true), HostState::default())
            .is_empty());
    }
}
