//! Status bar (menu bar) item with context menu.
//!
//! Left click toggles the browser popover; right click shows the menu:
//! - Settings…
//! - About
//! - Quit
//!
//! Clicks and menu picks are published to the event bus. The dispatcher
//! decides what to do with them on the UI thread.

use std::error::Error;

use eframe::egui;
use tray_icon::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent};

use crate::events::{publish, AppEvent, StatusClick};

/// Icon edge in pixels (menu bar icons are 18pt, drawn at 2x).
const ICON_PX: u32 = 36;

/// Live status item. Dropping it removes the icon from the menu bar.
pub struct StatusItem {
    tray: TrayIcon,
}

impl StatusItem {
    /// Top-left corner and size of the icon on screen, in physical pixels.
    pub fn anchor(&self) -> Option<([f32; 2], [f32; 2])> {
        let rect = self.tray.rect()?;
        Some((
            [rect.position.x as f32, rect.position.y as f32],
            [rect.size.width as f32, rect.size.height as f32],
        ))
    }
}

/// Install the status item and route its events to the bus.
///
/// Must be called on the main thread after the event loop started.
pub fn install_status_bar(ctx: &egui::Context) -> Result<StatusItem, Box<dyn Error>> {
    let menu = Menu::new();
    let settings_item = MenuItem::new("Settings…", true, None);
    let about_item = MenuItem::new("About SymbolBar", true, None);
    let quit_item = MenuItem::new("Quit", true, None);
    menu.append(&settings_item)?;
    menu.append(&about_item)?;
    menu.append(&PredefinedMenuItem::separator())?;
    menu.append(&quit_item)?;

    let tray = TrayIconBuilder::new()
        .with_menu(Box::new(menu))
        .with_menu_on_left_click(false)
        .with_tooltip("SF Symbols")
        .with_icon(status_icon()?)
        .with_icon_as_template(true)
        .build()?;

    let settings_id = settings_item.id().clone();
    let about_id = about_item.id().clone();
    let quit_id = quit_item.id().clone();
    let menu_ctx = ctx.clone();
    MenuEvent::set_event_handler(Some(move |event: MenuEvent| {
        let app_event = if event.id == settings_id {
            AppEvent::OpenSettings
        } else if event.id == about_id {
            AppEvent::ShowAbout
        } else if event.id == quit_id {
            AppEvent::Quit
        } else {
            return;
        };
        publish(app_event);
        menu_ctx.request_repaint();
    }));

    let click_ctx = ctx.clone();
    TrayIconEvent::set_event_handler(Some(move |event: TrayIconEvent| {
        if let TrayIconEvent::Click {
            button,
            button_state: MouseButtonState::Up,
            ..
        } = event
        {
            let click = match button {
                MouseButton::Left => StatusClick::Left,
                MouseButton::Right => StatusClick::Right,
                _ => return,
            };
            publish(AppEvent::StatusItemClicked(click));
            click_ctx.request_repaint();
        }
    }));

    log::info!("Status item installed");
    Ok(StatusItem { tray })
}

/// A 2x2 grid of rounded squares, black on transparent (template image).
fn status_icon() -> Result<Icon, Box<dyn Error>> {
    let size = ICON_PX as i32;
    let cell = size / 2;
    let gap = 3;
    let radius = 4;
    let mut rgba = Vec::with_capacity((ICON_PX * ICON_PX * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let (cx, cy) = (x % cell, y % cell);
            let inside = cx >= gap / 2
                && cx < cell - gap / 2 - 1
                && cy >= gap / 2
                && cy < cell - gap / 2 - 1
                && !in_corner(cx - gap / 2, cy - gap / 2, cell - gap, radius);
            let alpha = if inside { 255 } else { 0 };
            rgba.extend_from_slice(&[0, 0, 0, alpha]);
        }
    }

    Ok(Icon::from_rgba(rgba, ICON_PX, ICON_PX)?)
}

/// True if (x, y) in a `side`-sized square falls outside its rounded corners.
fn in_corner(x: i32, y: i32, side: i32, radius: i32) -> bool {
    let nearest = |v: i32| {
        if v < radius {
            radius - v
        } else if v >= side - radius {
            v - (side - radius - 1)
        } else {
            0
        }
    };
    let (dx, dy) = (nearest(x), nearest(y));
    dx > 0 && dy > 0 && dx * dx + dy * dy > radius * radius
}
