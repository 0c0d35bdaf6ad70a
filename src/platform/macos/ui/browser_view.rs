//! The symbol browser drawn inside the popover.
//!
//! All focus and selection rules live in [`BrowserState`]; this view renders
//! it, translates egui input into router key events and executes the
//! resulting actions.

use std::time::Instant;

use eframe::egui::{
    self, Align, Align2, Color32, Event, FontId, Id, Order, ScrollArea, Sense, TextEdit, Vec2,
};

use super::glyphs::GlyphCache;
use crate::browser::{BrowserState, FocusRegion, Key, KeyAction, KeyEvent, KeyModifiers};
use crate::catalog::{filter_indices, SymbolCatalog};
use crate::clipboard::{copy_symbol, Clipboard};
use crate::model::Preferences;
use crate::toast::ToastState;

const SIDEBAR_WIDTH: f32 = 170.0;
const SIDEBAR_ICON: f32 = 16.0;
const NAME_FONT: f32 = 11.0;
const NAME_CHARS: usize = 14;

fn search_id() -> Id {
    Id::new("symbol_search")
}

/// What the popover host must do after a frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrowserOutcome {
    pub dismiss: bool,
}

pub struct BrowserView {
    state: BrowserState,
    toast: ToastState,
    glyphs: GlyphCache,
    filtered: Vec<usize>,
    filter_key: Option<(String, String)>,
    reveal_selection: bool,
}

impl Default for BrowserView {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserView {
    pub fn new() -> Self {
        Self {
            state: BrowserState::default(),
            toast: ToastState::default(),
            glyphs: GlyphCache::default(),
            filtered: Vec::new(),
            filter_key: None,
            reveal_selection: false,
        }
    }

    /// Resets the view for a fresh appearance.
    pub fn appear(&mut self) {
        self.state.appear();
        self.toast.clear();
        self.filter_key = None;
    }

    fn refresh_filter(&mut self, catalog: &SymbolCatalog) {
        let key = (self.state.category().to_string(), self.state.query().to_string());
        if self.filter_key.as_ref() != Some(&key) {
            self.filtered = filter_indices(catalog, &key.0, &key.1);
            self.filter_key = Some(key);
        }
        self.state.revalidate(self.filtered.len());
    }

    fn symbol_name<'a>(&self, catalog: &'a SymbolCatalog, index: usize) -> Option<&'a str> {
        let symbol = *self.filtered.get(index)?;
        catalog.symbols().get(symbol).map(String::as_str)
    }

    /// Draws one frame.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        catalog: &SymbolCatalog,
        prefs: &Preferences,
        clipboard: &mut dyn Clipboard,
    ) -> BrowserOutcome {
        let now = Instant::now();
        let mut outcome = BrowserOutcome::default();

        self.refresh_filter(catalog);
        self.route_input(ctx, catalog, clipboard, now, &mut outcome);
        self.sync_widget_focus(ctx);

        self.draw_sidebar(ctx, catalog);
        self.draw_search(ctx, catalog);
        self.draw_grid(ctx, catalog, prefs);

        self.toast.tick(now);
        self.draw_toast(ctx);
        if let Some(deadline) = self.toast.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        outcome
    }

    /// Feeds key presses to the router, removing the ones it consumed.
    fn route_input(
        &mut self,
        ctx: &egui::Context,
        catalog: &SymbolCatalog,
        clipboard: &mut dyn Clipboard,
        now: Instant,
        outcome: &mut BrowserOutcome,
    ) {
        let events = ctx.input(|i| i.events.clone());
        let mut consumed = Vec::new();

        for (position, event) in events.iter().enumerate() {
            let Some(key_event) = translate(event) else {
                continue;
            };
            match self.state.handle_key(key_event, self.filtered.len()) {
                KeyAction::Ignored => continue,
                KeyAction::Handled => self.reveal_selection = true,
                KeyAction::Copy(index) => {
                    if let Some(name) = self.symbol_name(catalog, index) {
                        copy_symbol(clipboard, &mut self.toast, name, now);
                    }
                }
                KeyAction::MoveCategory(delta) => {
                    self.state.step_category(catalog.categories(), delta);
                }
                KeyAction::Dismiss => outcome.dismiss = true,
            }
            consumed.push(position);
            self.refresh_filter(catalog);
        }

        if !consumed.is_empty() {
            ctx.input_mut(|i| {
                let mut position = 0;
                i.events.retain(|_| {
                    let keep = !consumed.contains(&position);
                    position += 1;
                    keep
                });
            });
        }
    }

    /// Moves egui focus to match the router.
    fn sync_widget_focus(&mut self, ctx: &egui::Context) {
        if self.state.take_focus_request() == Some(FocusRegion::SearchField) {
            ctx.memory_mut(|m| m.request_focus(search_id()));
        } else if self.state.focus() != FocusRegion::SearchField {
            ctx.memory_mut(|m| {
                if let Some(focused) = m.focused() {
                    m.surrender_focus(focused);
                }
            });
        }
    }

    fn draw_sidebar(&mut self, ctx: &egui::Context, catalog: &SymbolCatalog) {
        egui::SidePanel::left("categories")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(6.0);
                    let pixels = (SIDEBAR_ICON * ctx.pixels_per_point()).round() as u32;
                    let tint = ui.visuals().text_color();
                    for category in catalog.categories() {
                        let selected = category.key == self.state.category();
                        ui.horizontal(|ui| {
                            match self.glyphs.get(ctx, &category.icon, pixels) {
                                Some(texture) => {
                                    ui.add(
                                        egui::Image::new(texture)
                                            .tint(tint)
                                            .fit_to_exact_size(Vec2::splat(SIDEBAR_ICON)),
                                    );
                                }
                                None => {
                                    ui.add_space(SIDEBAR_ICON + ui.spacing().item_spacing.x);
                                }
                            }
                            if ui.selectable_label(selected, &category.label).clicked() {
                                self.state.select_category(&category.key);
                            }
                        });
                    }
                });
            });
        self.refresh_filter(catalog);
    }

    fn draw_search(&mut self, ctx: &egui::Context, catalog: &SymbolCatalog) {
        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            ui.add_space(8.0);
            let mut query = self.state.query().to_string();
            let response = ui.add(
                TextEdit::singleline(&mut query)
                    .id(search_id())
                    .hint_text("Search SF Symbols")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                self.state.set_query(&query);
            }
            if response.has_focus() && self.state.focus() != FocusRegion::SearchField {
                self.state.focus_search();
            }
            ui.add_space(6.0);
        });
        self.refresh_filter(catalog);
    }

    fn draw_grid(&mut self, ctx: &egui::Context, catalog: &SymbolCatalog, prefs: &Preferences) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let len = self.filtered.len();
            if len == 0 {
                ui.centered_and_justified(|ui| ui.weak("No Symbols"));
                return;
            }

            let columns = self.state.columns();
            let spacing = ui.spacing().item_spacing;
            let cell_width = ((ui.available_width() - spacing.x * columns as f32)
                / columns as f32)
                .floor()
                .max(40.0);
            let glyph = (prefs.icon_size as f32).min(cell_width - 16.0);
            let label_height = if prefs.show_symbol_names { 30.0 } else { 0.0 };
            let cell = Vec2::new(cell_width, glyph + 16.0 + label_height);
            let rows = len.div_ceil(columns);
            let pixels = (glyph * ctx.pixels_per_point()).round() as u32;

            let mut clicked = None;
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show_rows(ui, cell.y, rows, |ui, row_range| {
                    for row in row_range {
                        ui.horizontal(|ui| {
                            for column in 0..columns {
                                let index = row * columns + column;
                                let Some(name) = self.symbol_name(catalog, index) else {
                                    break;
                                };
                                let selected = self.state.selected() == Some(index);
                                let response = self.draw_cell(
                                    ui,
                                    name,
                                    cell,
                                    glyph,
                                    pixels,
                                    selected,
                                    prefs.show_symbol_names,
                                );
                                if selected && self.reveal_selection {
                                    response.scroll_to_me(Some(Align::Center));
                                }
                                let response =
                                    response.on_hover_ui(|ui| symbol_tooltip(ui, catalog, name));
                                if response.clicked() {
                                    clicked = Some(index);
                                }
                            }
                        });
                    }
                });
            self.reveal_selection = false;

            if let Some(index) = clicked {
                self.state.click_cell(index, len);
            }
        });
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &mut self,
        ui: &mut egui::Ui,
        name: &str,
        cell: Vec2,
        glyph: f32,
        pixels: u32,
        selected: bool,
        show_name: bool,
    ) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(cell, Sense::click());
        let visuals = ui.visuals();
        let glyph_box = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, rect.top() + (glyph + 16.0) / 2.0),
            Vec2::splat(glyph + 16.0),
        );

        let (glyph_color, name_color) = if selected {
            ui.painter()
                .rect_filled(glyph_box, 8.0, visuals.selection.bg_fill);
            (Color32::WHITE, visuals.selection.bg_fill)
        } else if response.hovered() {
            ui.painter()
                .rect_filled(glyph_box, 8.0, visuals.widgets.hovered.weak_bg_fill);
            (visuals.text_color(), visuals.text_color())
        } else {
            (visuals.text_color(), visuals.text_color())
        };

        if let Some(texture) = self.glyphs.get(ui.ctx(), name, pixels) {
            egui::Image::new(texture)
                .tint(glyph_color)
                .paint_at(ui, egui::Rect::from_center_size(glyph_box.center(), Vec2::splat(glyph)));
        }

        if show_name {
            ui.painter().text(
                egui::pos2(rect.center().x, glyph_box.bottom() + 4.0),
                Align2::CENTER_TOP,
                elide(name, NAME_CHARS),
                FontId::proportional(NAME_FONT),
                name_color,
            );
        }
        response
    }

    fn draw_toast(&self, ctx: &egui::Context) {
        let Some(message) = self.toast.message() else {
            return;
        };
        egui::Area::new(Id::new("copy_toast"))
            .order(Order::Foreground)
            .anchor(Align2::CENTER_BOTTOM, Vec2::new(0.0, -20.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(message).size(12.0).strong());
                });
            });
    }
}

/// Maps an egui event to a router key event.
fn translate(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key {
            key,
            pressed: true,
            modifiers,
            ..
        } => {
            let key = match key {
                egui::Key::ArrowUp => Key::ArrowUp,
                egui::Key::ArrowDown => Key::ArrowDown,
                egui::Key::ArrowLeft => Key::ArrowLeft,
                egui::Key::ArrowRight => Key::ArrowRight,
                egui::Key::Tab => Key::Tab,
                egui::Key::Enter => Key::Enter,
                egui::Key::Space => Key::Space,
                egui::Key::Escape => Key::Escape,
                _ => return None,
            };
            Some(KeyEvent::new(
                key,
                KeyModifiers {
                    command: modifiers.mac_cmd || modifiers.command,
                    shift: modifiers.shift,
                    option: modifiers.alt,
                    control: modifiers.ctrl,
                },
            ))
        }
        Event::Text(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_alphanumeric() => Some(KeyEvent::plain(Key::Char(ch))),
                _ => None,
            }
        }
        // egui turns Cmd+C into a dedicated event
        Event::Copy => Some(KeyEvent::command(Key::Char('c'))),
        _ => None,
    }
}

/// Shortens `name` to `max` characters with a trailing ellipsis.
/// Name, first release and older names of a grid symbol.
fn symbol_tooltip(ui: &mut egui::Ui, catalog: &SymbolCatalog, name: &str) {
    let Some(info) = catalog.symbol(name) else {
        ui.label(name);
        return;
    };
    ui.strong(info.name);
    if let Some(release) = info.release {
        ui.weak(format!("Available since {}", release));
    }
    if !info.aliases.is_empty() {
        ui.weak(format!("Formerly {}", info.aliases.join(", ")));
    }
}

fn elide(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let mut short: String = name.chars().take(max - 1).collect();
    short.push('…');
    short
}
