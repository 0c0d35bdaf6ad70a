//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It runs at the start of every UI frame and
//! processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! drain_events() → Dispatcher::dispatch() → StatusController → StatusCommand → AppKit / egui
//! ```

use eframe::egui::{self, ViewportCommand};

use crate::events::{drain_events, AppEvent};
use crate::hotkey::HotkeyManager;
use crate::login_item::LoginItem;
use crate::model::Preferences;
use crate::platform::macos::app::{
    activate_app, is_app_active, show_about_panel, AppServiceLoginItem,
};
use crate::platform::macos::ffi::bridge::autoreleasepool;
use crate::platform::macos::input::GlobalHotkeyBackend;
use crate::platform::macos::storage::save_preferences;
use crate::platform::macos::ui::{Popover, SettingsWindow, StatusItem};
use crate::status::{HostState, StatusCommand, StatusController};

/// Windows and OS handles the dispatcher acts on.
pub struct AppWindows {
    pub popover: Popover,
    pub settings: Option<SettingsWindow>,
    pub status_item: Option<StatusItem>,
}

pub struct Dispatcher {
    controller: StatusController,
    hotkeys: Option<HotkeyManager<GlobalHotkeyBackend>>,
    login_item: Option<LoginItem<AppServiceLoginItem>>,
}

impl Dispatcher {
    /// Creates the dispatcher and binds the hotkey from `prefs`.
    ///
    /// Without a hotkey backend the app keeps working, minus the shortcut.
    pub fn new(prefs: &Preferences) -> Self {
        let hotkeys = match GlobalHotkeyBackend::new() {
            Ok(backend) => {
                let mut manager = HotkeyManager::new(backend);
                manager.register(&prefs.hotkey_combination());
                Some(manager)
            }
            Err(e) => {
                log::warn!("Running without a global hotkey: {}", e);
                None
            }
        };
        let login_item = match AppServiceLoginItem::new() {
            Ok(backend) => Some(LoginItem::new(backend)),
            Err(e) => {
                log::warn!("Launch at login unavailable: {}", e);
                None
            }
        };
        Self {
            controller: StatusController::new(),
            hotkeys,
            login_item,
        }
    }

    /// Dispatch all pending events from the global event bus.
    pub fn dispatch_events(
        &mut self,
        ctx: &egui::Context,
        windows: &mut AppWindows,
        prefs: &mut Preferences,
    ) {
        for event in drain_events() {
            log::debug!("Dispatching: {}", event.description());
            self.dispatch(ctx, windows, prefs, &event);
        }
    }

    fn dispatch(
        &mut self,
        ctx: &egui::Context,
        windows: &mut AppWindows,
        prefs: &mut Preferences,
        event: &AppEvent,
    ) {
        match event {
            AppEvent::HotkeyPressed { id } => {
                let bound = self.hotkeys.as_ref().is_some_and(|m| m.is_bound(*id));
                if !bound {
                    return;
                }
            }
            AppEvent::HotkeyChanged(text) => {
                self.change_hotkey(text, windows, prefs);
                return;
            }
            AppEvent::LaunchAtLoginChanged(enabled) => {
                self.change_launch_at_login(*enabled, windows);
                return;
            }
            _ => {}
        }

        let host = HostState {
            app_active: is_app_active(),
            settings_visible: windows.settings.as_ref().is_some_and(SettingsWindow::is_visible),
        };
        for command in self.controller.handle(event, host) {
            self.execute(ctx, windows, prefs, command);
        }
    }

    fn change_hotkey(&mut self, text: &str, windows: &mut AppWindows, prefs: &mut Preferences) {
        let result = match self.hotkeys.as_mut() {
            Some(manager) => manager.rebind(text).map_err(|e| e.to_string()),
            None => Err("Global hotkeys are unavailable".to_string()),
        };

        match result {
            Ok(combo) => {
                prefs.hotkey = combo.to_string();
                autoreleasepool(|_| unsafe { save_preferences(prefs) });
            }
            Err(message) => {
                log::warn!("Rejected hotkey {:?}: {}", text, message);
                if let Some(settings) = windows.settings.as_mut() {
                    settings.set_hotkey_error(message);
                    settings.set_hotkey_text(&prefs.hotkey);
                }
            }
        }
    }

    fn change_launch_at_login(&mut self, enabled: bool, windows: &mut AppWindows) {
        let actual = match self.login_item.as_mut() {
            Some(item) => item.apply(enabled).unwrap_or_else(|_| item.is_enabled()),
            None => false,
        };
        if let Some(settings) = windows.settings.as_mut() {
            settings.set_launch_at_login(actual);
        }
    }

    fn launch_at_login(&self) -> bool {
        self.login_item.as_ref().is_some_and(LoginItem::is_enabled)
    }

    fn execute(
        &self,
        ctx: &egui::Context,
        windows: &mut AppWindows,
        prefs: &Preferences,
        command: StatusCommand,
    ) {
        match command {
            StatusCommand::ShowPopover { activate_app: activate } => {
                if activate {
                    activate_app();
                }
                let anchor = windows.status_item.as_ref().and_then(StatusItem::anchor);
                windows.popover.show(ctx, anchor);
            }

            StatusCommand::HidePopover => windows.popover.hide(ctx),

            StatusCommand::ShowContextMenu => {
                // The status item pops up its own menu on right click
                log::debug!("Context menu shown");
            }

            StatusCommand::CreateSettingsWindow { token } => {
                activate_app();
                let launch_at_login = self.launch_at_login();
                windows.settings = Some(SettingsWindow::new(token, prefs, launch_at_login));
                ctx.request_repaint();
            }

            StatusCommand::FocusSettingsWindow => {
                activate_app();
                if let Some(settings) = windows.settings.as_mut() {
                    settings.focus(ctx);
                }
            }

            StatusCommand::DetachSettingsObserver { token } => {
                if windows.settings.as_ref().map(SettingsWindow::token) == Some(token) {
                    windows.settings = None;
                }
            }

            StatusCommand::ShowAbout => show_about_panel(),

            StatusCommand::Quit => {
                log::info!("Quit requested");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
        }
    }
}
