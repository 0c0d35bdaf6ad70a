//! macOS-specific entry point and application logic.
//!
//! The egui root viewport is the popover; it starts hidden and is shown
//! by the status item or the global hotkey.

use eframe::egui;
use eframe::winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};

use symbolbar::catalog::default_resource_dir;
use symbolbar::clipboard::{Clipboard, MemoryClipboard};
use symbolbar::events::{publish, AppEvent};
use symbolbar::model::{Preferences, POPOVER_SIZE};
use symbolbar::platform::macos::app::SystemClipboard;
use symbolbar::platform::macos::bridge::autoreleasepool;
use symbolbar::platform::macos::input::install_hotkey_handler;
use symbolbar::platform::macos::storage::{load_preferences, save_preferences};
use symbolbar::platform::macos::ui::{install_status_bar, Popover};
use symbolbar::platform::macos::{AppWindows, Dispatcher};

/// Main entry point for macOS.
pub fn run() -> eframe::Result<()> {
    // Event bus is already initialized by main()

    let prefs = autoreleasepool(|_| unsafe { load_preferences() });
    log::info!(
        "Preferences: names={} icon_size={} hotkey={}",
        prefs.show_symbol_names,
        prefs.icon_size,
        prefs.hotkey
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("SymbolBar")
            .with_inner_size(POPOVER_SIZE)
            .with_resizable(false)
            .with_decorations(false)
            .with_always_on_top()
            .with_visible(false),
        // Menu bar app: no Dock icon, no main menu
        event_loop_builder: Some(Box::new(|builder| {
            builder.with_activation_policy(ActivationPolicy::Accessory);
        })),
        ..Default::default()
    };

    eframe::run_native(
        "SymbolBar",
        options,
        Box::new(move |cc| Ok(Box::new(SymbolBarApp::new(cc, prefs)))),
    )
}

struct SymbolBarApp {
    prefs: Preferences,
    windows: AppWindows,
    dispatcher: Dispatcher,
    clipboard: Box<dyn Clipboard>,
}

impl SymbolBarApp {
    fn new(cc: &eframe::CreationContext<'_>, prefs: Preferences) -> Self {
        let ctx = cc.egui_ctx.clone();

        // Status bar item in menu bar
        let status_item = match install_status_bar(&ctx) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("Status item unavailable: {}", e);
                None
            }
        };

        let dispatcher = Dispatcher::new(&prefs);
        install_hotkey_handler(ctx);

        let clipboard: Box<dyn Clipboard> = match SystemClipboard::new() {
            Ok(clipboard) => Box::new(clipboard),
            Err(e) => {
                log::warn!("System clipboard unavailable, copies stay in memory: {}", e);
                Box::new(MemoryClipboard::default())
            }
        };

        Self {
            prefs,
            windows: AppWindows {
                popover: Popover::new(default_resource_dir()),
                settings: None,
                status_item,
            },
            dispatcher,
            clipboard,
        }
    }
}

impl eframe::App for SymbolBarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatcher
            .dispatch_events(ctx, &mut self.windows, &mut self.prefs);

        if self
            .windows
            .popover
            .draw(ctx, &self.prefs, self.clipboard.as_mut())
        {
            self.windows.popover.hide(ctx);
            publish(AppEvent::PopoverDismissed);
        }

        if let Some(settings) = self.windows.settings.as_mut() {
            let outcome = settings.show(ctx, &mut self.prefs);
            let wake =
                outcome.hotkey.is_some() || outcome.launch_at_login.is_some() || outcome.closed;
            if outcome.prefs_changed {
                self.prefs.validate();
                autoreleasepool(|_| unsafe { save_preferences(&self.prefs) });
            }
            if let Some(hotkey) = outcome.hotkey {
                publish(AppEvent::HotkeyChanged(hotkey));
            }
            if let Some(enabled) = outcome.launch_at_login {
                publish(AppEvent::LaunchAtLoginChanged(enabled));
            }
            if outcome.closed {
                publish(AppEvent::SettingsClosed {
                    token: settings.token(),
                });
            }
            if wake {
                ctx.request_repaint();
            }
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }
}
