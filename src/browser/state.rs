//! Browsing state and the keyboard focus router.

use super::keys::{Key, KeyEvent};
use crate::model::{Category, CATEGORY_ALL, GRID_COLUMNS};

/// Which part of the browser owns keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusRegion {
    Sidebar,
    SearchField,
    Grid,
    #[default]
    None,
}

/// Outcome of routing one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Not consumed; the focused widget may handle it.
    Ignored,
    /// Consumed; state may have changed.
    Handled,
    /// Copy the symbol at this filtered index.
    Copy(usize),
    /// Move the sidebar selection by this many rows.
    MoveCategory(i32),
    /// Close the popover.
    Dismiss,
}

/// Selection, query and focus of the browsing view.
///
/// The highlighted index is either `None` or a valid index into the filtered
/// list the caller passes in; every change to the filter clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    category: String,
    query: String,
    focus: FocusRegion,
    selected: Option<usize>,
    columns: usize,
    focus_request: Option<FocusRegion>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(GRID_COLUMNS)
    }
}

impl BrowserState {
    pub fn new(columns: usize) -> Self {
        Self {
            category: CATEGORY_ALL.to_string(),
            query: String::new(),
            focus: FocusRegion::None,
            selected: None,
            columns: columns.max(1),
            focus_request: None,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> FocusRegion {
        self.focus
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Resets everything for a fresh appearance and asks for the search
    /// field to be focused once the view is on screen.
    pub fn appear(&mut self) {
        self.category = CATEGORY_ALL.to_string();
        self.query.clear();
        self.selected = None;
        self.focus = FocusRegion::None;
        self.focus_request = Some(FocusRegion::SearchField);
    }

    /// One-shot request for the presenter to move widget focus.
    pub fn take_focus_request(&mut self) -> Option<FocusRegion> {
        self.focus_request.take()
    }

    fn move_focus(&mut self, region: FocusRegion) {
        self.focus = region;
        self.focus_request = Some(region);
    }

    /// Selects a sidebar category.
    pub fn select_category(&mut self, key: &str) {
        if self.category != key {
            self.category = key.to_string();
        }
        self.selected = None;
        self.focus = FocusRegion::Sidebar;
    }

    /// Moves the category selection by `delta` rows, wrapping around.
    pub fn step_category(&mut self, categories: &[Category], delta: i32) {
        if categories.is_empty() {
            return;
        }
        let len = categories.len() as i64;
        let current = categories
            .iter()
            .position(|c| c.key == self.category)
            .unwrap_or(0) as i64;
        let next = (current + i64::from(delta)).rem_euclid(len) as usize;
        self.select_category(&categories[next].key);
    }

    /// Replaces the search query. A real change clears the selection.
    pub fn set_query(&mut self, query: &str) {
        if self.query == query {
            return;
        }
        self.query = query.to_string();
        self.selected = None;
        if self.focus == FocusRegion::Grid {
            self.move_focus(FocusRegion::SearchField);
        }
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
        self.selected = None;
    }

    /// The search field took focus (pointer or widget traversal).
    pub fn focus_search(&mut self) {
        self.focus = FocusRegion::SearchField;
        self.selected = None;
    }

    /// A grid cell was clicked. Returns false if `index` is out of range.
    pub fn click_cell(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        self.focus = FocusRegion::Grid;
        self.selected = Some(index);
        true
    }

    /// Enter in the search field: move into the grid when it has results.
    pub fn submit_search(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.enter_grid();
        true
    }

    fn enter_grid(&mut self) {
        self.move_focus(FocusRegion::Grid);
        self.selected = Some(0);
    }

    /// Drops a selection that no longer fits a filtered list of `len` items.
    pub fn revalidate(&mut self, len: usize) {
        if self.selected.is_some_and(|i| i >= len) {
            self.selected = None;
        }
    }

    /// Routes one key press. `len` is the current filtered list length.
    pub fn handle_key(&mut self, event: KeyEvent, len: usize) -> KeyAction {
        self.revalidate(len);
        if event.key == Key::Escape {
            return KeyAction::Dismiss;
        }

        match self.focus {
            FocusRegion::SearchField => match event.key {
                Key::ArrowDown | Key::Tab if len > 0 => {
                    self.enter_grid();
                    KeyAction::Handled
                }
                Key::Enter if self.submit_search(len) => KeyAction::Handled,
                _ => KeyAction::Ignored,
            },
            FocusRegion::Sidebar => match event.key {
                Key::Tab => {
                    self.move_focus(FocusRegion::SearchField);
                    KeyAction::Handled
                }
                Key::ArrowUp => KeyAction::MoveCategory(-1),
                Key::ArrowDown => KeyAction::MoveCategory(1),
                _ => KeyAction::Ignored,
            },
            FocusRegion::Grid => self.handle_grid_key(event, len),
            FocusRegion::None => KeyAction::Ignored,
        }
    }

    fn handle_grid_key(&mut self, event: KeyEvent, len: usize) -> KeyAction {
        if let Some(ch) = event.search_char() {
            self.push_query_char(ch);
            self.move_focus(FocusRegion::SearchField);
            return KeyAction::Handled;
        }
        if event.key == Key::Tab {
            self.selected = None;
            self.move_focus(FocusRegion::Sidebar);
            return KeyAction::Handled;
        }
        if len == 0 {
            return KeyAction::Ignored;
        }

        let index = self.selected.unwrap_or(0);
        if event.is_copy_shortcut() || matches!(event.key, Key::Enter | Key::Space) {
            self.selected = Some(index);
            return KeyAction::Copy(index);
        }

        let cols = self.columns;
        let next = match event.key {
            Key::ArrowLeft => (index + len - 1) % len,
            Key::ArrowRight => (index + 1) % len,
            Key::ArrowDown if index + cols < len => index + cols,
            Key::ArrowDown => index % cols,
            Key::ArrowUp if index >= cols => index - cols,
            Key::ArrowUp => {
                self.selected = None;
                self.move_focus(FocusRegion::SearchField);
                return KeyAction::Handled;
            }
            _ => return KeyAction::Ignored,
        };
        self.selected = Some(next);
        KeyAction::Handled
    }
}
