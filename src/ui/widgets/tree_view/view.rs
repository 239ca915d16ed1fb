//! TreeView state management and action handling.
//!
//! Wraps a `TreeStateStore` with a row cursor and a search buffer, and turns
//! user actions into store operations.

use arbor::models::forest_count;
use arbor::{ArborResult, NodeInspector, TreeStateStore};

use super::decorators::Decorators;
use super::render::{render_help_bar, render_panel, render_rows, render_search_box, render_status_bar};
use super::rows::{flatten_visible, Row};

/// Tree view action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Flip the node under the cursor (and select it)
    Toggle,
    /// Open the node under the cursor
    Open,
    /// Close the node under the cursor
    Close,
    /// Append a character to the search query
    Type(char),
    /// Delete the last search character
    Backspace,
    /// Clear the search, or quit when it is already empty
    Escape,
    /// Quit immediately
    Quit,
}

pub struct TreeView {
    store: TreeStateStore,
    inspector: NodeInspector,
    decorators: Decorators,
    rows: Vec<Row>,
    cursor: usize,
    search: String,
}

impl TreeView {
    pub fn new(store: TreeStateStore, inspector: NodeInspector, decorators: Decorators) -> Self {
        let mut view = Self {
            store,
            inspector,
            decorators,
            rows: Vec::new(),
            cursor: 0,
            search: String::new(),
        };
        view.rebuild_rows();
        view
    }

    /// Rebuild the visible rows and keep the cursor in range
    fn rebuild_rows(&mut self) {
        self.rows = flatten_visible(self.store.tree());
        if self.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn store(&self) -> &TreeStateStore {
        &self.store
    }

    fn cursor_id(&self) -> Option<String> {
        self.rows.get(self.cursor)?.id.clone()
    }

    /// Handle an action; returns true when the view should close
    pub fn handle_action(&mut self, action: ViewAction) -> bool {
        match action {
            ViewAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            ViewAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
                false
            }
            ViewAction::Toggle => {
                if let Some(id) = self.cursor_id() {
                    self.store.toggle_flip(&id);
                    self.rebuild_rows();
                }
                false
            }
            ViewAction::Open | ViewAction::Close => {
                if let Some(id) = self.cursor_id() {
                    self.store.toggle(&id, action == ViewAction::Open);
                    self.rebuild_rows();
                }
                false
            }
            ViewAction::Type(c) => {
                self.search.push(c);
                self.apply_search();
                false
            }
            ViewAction::Backspace => {
                self.search.pop();
                self.apply_search();
                false
            }
            ViewAction::Escape => {
                if self.search.is_empty() {
                    return true;
                }
                self.search.clear();
                self.apply_search();
                false
            }
            ViewAction::Quit => true,
        }
    }

    /// Refilter on every keystroke
    fn apply_search(&mut self) {
        self.store.set_filter(&self.search);
        self.cursor = 0;
        self.rebuild_rows();
    }

    /// Inspector panel text for the current selection
    pub fn inspector_text(&self) -> ArborResult<String> {
        self.store.inspect(&self.inspector)
    }

    /// Render the whole screen
    pub fn render(&self, supports_unicode: bool, supports_color: bool) -> ArborResult<String> {
        let rows = self.rows();
        let mut out = String::new();
        out.push_str(&render_search_box(self.search(), supports_unicode, supports_color));
        out.push_str("\n\n");

        if rows.is_empty() {
            out.push_str("  (no matching nodes)\n");
        } else {
            out.push_str(&render_rows(
                rows,
                Some(self.cursor_position()),
                &self.decorators,
                supports_color,
            ));
        }
        out.push('\n');
        let store = self.store();
        out.push_str(&render_status_bar(
            rows.len(),
            forest_count(store.source()),
            store.query(),
        ));
        out.push_str("\n\n");
        out.push_str(&render_panel("Node", &self.inspector_text()?, supports_unicode));
        out.push('\n');
        out.push_str(&render_help_bar());
        Ok(out)
    }
}
