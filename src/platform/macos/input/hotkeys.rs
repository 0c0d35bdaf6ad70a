//! Global hotkey backend on top of the `global-hotkey` crate.
//!
//! Registration goes through [`HotkeyManager`](crate::hotkey::HotkeyManager);
//! fired events are published to the event bus and picked up by the UI frame.

use eframe::egui;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};

use crate::error::HotkeyError;
use crate::events::{publish, AppEvent};
use crate::hotkey::{HotkeyBackend, HotkeyCombination, HotkeyModifiers};

/// [`HotkeyBackend`] backed by the system shortcut facility.
pub struct GlobalHotkeyBackend {
    manager: GlobalHotKeyManager,
}

impl GlobalHotkeyBackend {
    /// Must be created on the main thread.
    pub fn new() -> Result<Self, HotkeyError> {
        let manager = GlobalHotKeyManager::new().map_err(|e| HotkeyError::Backend(e.to_string()))?;
        Ok(Self { manager })
    }
}

/// Converts a combination into the crate's hotkey type.
fn to_hotkey(combo: &HotkeyCombination) -> Result<HotKey, HotkeyError> {
    let code: Code = combo
        .code()
        .parse()
        .map_err(|_| HotkeyError::UnsupportedKey(combo.code().to_string()))?;

    let flags = combo.modifiers();
    let mut modifiers = Modifiers::empty();
    if flags.contains(HotkeyModifiers::COMMAND) {
        modifiers |= Modifiers::SUPER;
    }
    if flags.contains(HotkeyModifiers::SHIFT) {
        modifiers |= Modifiers::SHIFT;
    }
    if flags.contains(HotkeyModifiers::OPTION) {
        modifiers |= Modifiers::ALT;
    }
    if flags.contains(HotkeyModifiers::CONTROL) {
        modifiers |= Modifiers::CONTROL;
    }
    Ok(HotKey::new(Some(modifiers), code))
}

impl HotkeyBackend for GlobalHotkeyBackend {
    fn register(&mut self, combo: &HotkeyCombination) -> Result<u32, HotkeyError> {
        let hotkey = to_hotkey(combo)?;
        self.manager
            .register(hotkey)
            .map_err(|e| HotkeyError::Backend(e.to_string()))?;
        Ok(hotkey.id())
    }

    fn unregister(&mut self, combo: &HotkeyCombination, _id: u32) -> Result<(), HotkeyError> {
        let hotkey = to_hotkey(combo)?;
        self.manager
            .unregister(hotkey)
            .map_err(|e| HotkeyError::Backend(e.to_string()))
    }
}

/// Routes fired hotkeys to the event bus and wakes the UI.
///
/// Only key-down transitions are forwarded.
pub fn install_hotkey_handler(ctx: egui::Context) {
    GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
        if event.state == HotKeyState::Pressed {
            publish(AppEvent::HotkeyPressed { id: event.id });
            ctx.request_repaint();
        }
    }));
}
