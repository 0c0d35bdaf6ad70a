//! The popover: the root egui viewport, shown under the status item.
//!
//! It behaves like a transient popover: losing key focus dismisses it.

use std::path::PathBuf;

use eframe::egui::{self, ViewportCommand};

use super::browser_view::BrowserView;
use crate::catalog::{load_catalog, SymbolCatalog};
use crate::clipboard::Clipboard;
use crate::model::{Preferences, POPOVER_SIZE};

/// Gap between the menu bar and the popover, in points.
const ANCHOR_GAP: f32 = 4.0;

pub struct Popover {
    browser: BrowserView,
    resource_dir: PathBuf,
    catalog: Option<SymbolCatalog>,
    visible: bool,
    had_focus: bool,
}

impl Popover {
    pub fn new(resource_dir: PathBuf) -> Self {
        Self {
            browser: BrowserView::new(),
            resource_dir,
            catalog: None,
            visible: false,
            had_focus: false,
        }
    }

    /// Shows the popover below `anchor` (icon origin and size, physical px).
    pub fn show(&mut self, ctx: &egui::Context, anchor: Option<([f32; 2], [f32; 2])>) {
        if self.catalog.is_none() {
            self.catalog = Some(load_catalog(&self.resource_dir));
        }
        self.browser.appear();
        self.visible = true;
        self.had_focus = false;

        if let Some((origin, size)) = anchor {
            let scale = ctx
                .input(|i| i.viewport().native_pixels_per_point)
                .unwrap_or(ctx.pixels_per_point());
            let x = (origin[0] + size[0] / 2.0) / scale - POPOVER_SIZE.0 / 2.0;
            let y = (origin[1] + size[1]) / scale + ANCHOR_GAP;
            ctx.send_viewport_cmd(ViewportCommand::OuterPosition(egui::pos2(x.max(0.0), y)));
        }
        ctx.send_viewport_cmd(ViewportCommand::Visible(true));
        ctx.send_viewport_cmd(ViewportCommand::Focus);
        ctx.request_repaint();
    }

    pub fn hide(&mut self, ctx: &egui::Context) {
        self.visible = false;
        ctx.send_viewport_cmd(ViewportCommand::Visible(false));
    }

    /// Draws one frame. Returns true when the popover dismissed itself
    /// (Escape or focus lost).
    pub fn draw(
        &mut self,
        ctx: &egui::Context,
        prefs: &Preferences,
        clipboard: &mut dyn Clipboard,
    ) -> bool {
        if !self.visible {
            return false;
        }
        let Some(catalog) = &self.catalog else {
            return false;
        };

        let outcome = self.browser.show(ctx, catalog, prefs, clipboard);

        match ctx.input(|i| i.viewport().focused) {
            Some(true) => self.had_focus = true,
            Some(false) if self.had_focus => return true,
            _ => {}
        }
        outcome.dismiss
    }
}
