//! Settings window, shown as a separate native viewport.

use eframe::egui::{self, ViewportBuilder, ViewportCommand, ViewportId};

use crate::hotkey::HotkeyCombination;
use crate::model::{Preferences, ICON_SIZE_STEP, MAX_ICON_SIZE, MIN_ICON_SIZE, SETTINGS_SIZE};

fn viewport_id() -> ViewportId {
    ViewportId::from_hash_of("symbolbar_settings")
}

/// Result of drawing one settings frame.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SettingsOutcome {
    /// The user closed the window.
    pub closed: bool,
    /// A display preference changed and should be saved.
    pub prefs_changed: bool,
    /// A validated hotkey combination to apply.
    pub hotkey: Option<String>,
    /// The requested "Launch at login" state.
    pub launch_at_login: Option<bool>,
}

pub struct SettingsWindow {
    token: u64,
    hotkey_text: String,
    hotkey_error: Option<String>,
    launch_at_login: bool,
    minimized: bool,
    raise: bool,
}

impl SettingsWindow {
    pub fn new(token: u64, prefs: &Preferences, launch_at_login: bool) -> Self {
        Self {
            token,
            hotkey_text: prefs.hotkey.clone(),
            hotkey_error: None,
            launch_at_login,
            minimized: false,
            raise: false,
        }
    }

    pub fn token(&self) -> u64 {
        self.token
    }

    /// False while minimized.
    pub fn is_visible(&self) -> bool {
        !self.minimized
    }

    /// Brings the window to the front on its next frame, un-minimizing it.
    pub fn focus(&mut self, ctx: &egui::Context) {
        self.raise = true;
        ctx.request_repaint_of(viewport_id());
        ctx.request_repaint();
    }

    /// Shows a parse or registration failure under the hotkey field.
    pub fn set_hotkey_error(&mut self, message: impl Into<String>) {
        self.hotkey_error = Some(message.into());
    }

    /// Resets the hotkey field to the active combination.
    pub fn set_hotkey_text(&mut self, text: &str) {
        self.hotkey_text = text.to_string();
    }

    /// Syncs the checkbox with the state the system reports.
    pub fn set_launch_at_login(&mut self, enabled: bool) {
        self.launch_at_login = enabled;
    }

    pub fn show(&mut self, ctx: &egui::Context, prefs: &mut Preferences) -> SettingsOutcome {
        let mut outcome = SettingsOutcome::default();
        let builder = ViewportBuilder::default()
            .with_title("SymbolBar Settings")
            .with_inner_size(SETTINGS_SIZE)
            .with_resizable(false)
            .with_minimize_button(true)
            .with_maximize_button(false);

        ctx.show_viewport_immediate(viewport_id(), builder, |ctx, _class| {
            if std::mem::take(&mut self.raise) {
                ctx.send_viewport_cmd(ViewportCommand::Minimized(false));
                ctx.send_viewport_cmd(ViewportCommand::Focus);
                self.minimized = false;
            }

            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading("Settings");
                ui.add_space(8.0);

                if ui
                    .checkbox(&mut prefs.show_symbol_names, "Show symbol names")
                    .changed()
                {
                    outcome.prefs_changed = true;
                }

                ui.horizontal(|ui| {
                    ui.label("Icon size");
                    let slider = egui::Slider::new(&mut prefs.icon_size, MIN_ICON_SIZE..=MAX_ICON_SIZE)
                        .step_by(ICON_SIZE_STEP)
                        .suffix(" pt");
                    if ui.add(slider).changed() {
                        outcome.prefs_changed = true;
                    }
                });

                if ui
                    .checkbox(&mut self.launch_at_login, "Launch at login")
                    .changed()
                {
                    outcome.launch_at_login = Some(self.launch_at_login);
                }

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    ui.label("Global hotkey");
                    let field = ui.add(
                        egui::TextEdit::singleline(&mut self.hotkey_text)
                            .hint_text("Cmd+Shift+T")
                            .desired_width(140.0),
                    );
                    let submitted =
                        field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Apply").clicked() || submitted {
                        match self.hotkey_text.parse::<HotkeyCombination>() {
                            Ok(combo) => {
                                self.hotkey_text = combo.to_string();
                                self.hotkey_error = None;
                                outcome.hotkey = Some(self.hotkey_text.clone());
                            }
                            Err(e) => self.hotkey_error = Some(e.to_string()),
                        }
                    }
                });
                if let Some(error) = &self.hotkey_error {
                    ui.colored_label(ui.visuals().error_fg_color, error);
                }
            });

            let (closed, minimized) =
                ctx.input(|i| (i.viewport().close_requested(), i.viewport().minimized));
            outcome.closed = closed;
            if let Some(minimized) = minimized {
                self.minimized = minimized;
            }
        });

        outcome
    }
}
