//! Tests for the status item / popover / settings state machine.

use symbolbar::{AppEvent, HostState, PopoverState, StatusClick, StatusCommand, StatusController};

const INACTIVE: HostState = HostState {
    app_active: false,
    settings_visible: false,
};

const ACTIVE: HostState = HostState {
    app_active: true,
    settings_visible: false,
};

fn left_click() -> AppEvent {
    AppEvent::StatusItemClicked(StatusClick::Left)
}

#[test]
fn left_click_toggles_popover() {
    let mut controller = StatusController::new();

    assert_eq!(
        controller.handle(&left_click(), INACTIVE),
        [StatusCommand::ShowPopover { activate_app: true }]
    );
    assert_eq!(controller.popover(), PopoverState::Shown);

    assert_eq!(
        controller.handle(&left_click(), ACTIVE),
        [StatusCommand::HidePopover]
    );
    assert_eq!(controller.popover(), PopoverState::Hidden);
}

#[test]
fn active_app_is_not_reactivated() {
    let mut controller = StatusController::new();
    assert_eq!(
        controller.handle(&left_click(), ACTIVE),
        [StatusCommand::ShowPopover { activate_app: false }]
    );
}

#[test]
fn hotkey_behaves_like_left_click() {
    let mut controller = StatusController::new();
    controller.handle(&AppEvent::HotkeyPressed { id: 7 }, INACTIVE);
    assert_eq!(controller.popover(), PopoverState::Shown);
    controller.handle(&AppEvent::HotkeyPressed { id: 7 }, ACTIVE);
    assert_eq!(controller.popover(), PopoverState::Hidden);
}

#[test]
fn right_click_hides_popover_then_shows_menu() {
    let mut controller = StatusController::new();
    let right = AppEvent::StatusItemClicked(StatusClick::Right);

    assert_eq!(
        controller.handle(&right, ACTIVE),
        [StatusCommand::ShowContextMenu]
    );

    controller.handle(&left_click(), ACTIVE);
    assert_eq!(
        controller.handle(&right, ACTIVE),
        [StatusCommand::HidePopover, StatusCommand::ShowContextMenu]
    );
    assert_eq!(controller.popover(), PopoverState::Hidden);
}

#[test]
fn dismissal_resyncs_state() {
    let mut controller = StatusController::new();
    controller.handle(&left_click(), ACTIVE);
    assert!(controller.handle(&AppEvent::PopoverDismissed, ACTIVE).is_empty());

    // Next click shows again instead of hiding an already hidden popover
    assert_eq!(
        controller.handle(&left_click(), ACTIVE),
        [StatusCommand::ShowPopover { activate_app: false }]
    );
}

#[test]
fn settings_created_once_then_focused() {
    let mut controller = StatusController::new();
    assert_eq!(
        controller.handle(&AppEvent::OpenSettings, ACTIVE),
        [
            StatusCommand::CreateSettingsWindow { token: 1 },
            StatusCommand::FocusSettingsWindow,
        ]
    );

    let visible = HostState {
        app_active: true,
        settings_visible: true,
    };
    assert_eq!(
        controller.handle(&AppEvent::OpenSettings, visible),
        [StatusCommand::FocusSettingsWindow]
    );
    assert_eq!(controller.settings_token(), Some(1));
}

#[test]
fn minimized_settings_window_is_replaced_and_raised() {
    let mut controller = StatusController::new();
    controller.handle(&AppEvent::OpenSettings, ACTIVE);

    assert_eq!(
        controller.handle(&AppEvent::OpenSettings, ACTIVE),
        [
            StatusCommand::DetachSettingsObserver { token: 1 },
            StatusCommand::CreateSettingsWindow { token: 2 },
            StatusCommand::FocusSettingsWindow,
        ]
    );
}

#[test]
fn closing_settings_detaches_observer() {
    let mut controller = StatusController::new();
    controller.handle(&AppEvent::OpenSettings, ACTIVE);

    assert_eq!(
        controller.handle(&AppEvent::SettingsClosed { token: 1 }, ACTIVE),
        [StatusCommand::DetachSettingsObserver { token: 1 }]
    );
    assert_eq!(controller.settings_token(), None);

    // A new window is created next time
    assert_eq!(
        controller.handle(&AppEvent::OpenSettings, ACTIVE),
        [
            StatusCommand::CreateSettingsWindow { token: 2 },
            StatusCommand::FocusSettingsWindow,
        ]
    );
}

#[test]
fn stale_close_is_ignored() {
    let mut controller = StatusController::new();
    controller.handle(&AppEvent::OpenSettings, ACTIVE);
    controller.handle(&AppEvent::OpenSettings, ACTIVE);

    assert!(controller
        .handle(&AppEvent::SettingsClosed { token: 1 }, ACTIVE)
        .is_empty());
    assert_eq!(controller.settings_token(), Some(2));
}

#[test]
fn menu_items_pass_through() {
    let mut controller = StatusController::new();
    assert_eq!(
        controller.handle(&AppEvent::ShowAbout, ACTIVE),
        [StatusCommand::ShowAbout]
    );
    assert_eq!(controller.handle(&AppEvent::Quit, ACTIVE), [StatusCommand::Quit]);
}
