//! Terminal rendering functions for the tree view.
//!
//! Everything here renders to `String` so it can be tested without a
//! terminal.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{self, borders, borders_ascii, colors, icons, icons_ascii};

use super::decorators::Decorators;
use super::rows::Row;

/// Render a single row
pub fn render_row(row: &Row, has_cursor: bool, deco: &Decorators, supports_color: bool) -> String {
    let cursor = if has_cursor {
        format!("{} ", deco.cursor_glyph)
    } else {
        " ".repeat(deco.cursor_glyph.chars().count() + 1)
    };
    let indent = "  ".repeat(row.depth);
    let header = deco.header(row);
    let header = if row.active && supports_color {
        header.with(colors::ACTIVE).bold().to_string()
    } else if row.active {
        format!("{header} *")
    } else {
        header
    };

    format!("{cursor}{indent}{}{header}", deco.toggle(row))
}

/// Render all rows, one per line
pub fn render_rows(
    rows: &[Row],
    cursor: Option<usize>,
    deco: &Decorators,
    supports_color: bool,
) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&render_row(row, cursor == Some(i), deco, supports_color));
        out.push('\n');
    }
    out
}

/// Search box line with placeholder
pub fn render_search_box(query: &str, supports_unicode: bool, supports_color: bool) -> String {
    let icon = theme::pick(supports_unicode, icons::SEARCH, icons_ascii::SEARCH);
    if query.is_empty() {
        let placeholder = "Search the tree...";
        let placeholder = if supports_color {
            placeholder.with(colors::DIM).to_string()
        } else {
            placeholder.to_string()
        };
        format!("{icon} {placeholder}")
    } else {
        format!("{icon} {query}")
    }
}

/// Bordered panel with a title line
pub fn render_panel(title: &str, body: &str, supports_unicode: bool) -> String {
    let (tl, tr, bl, br, h, v) = if supports_unicode {
        (
            borders::TOP_LEFT,
            borders::TOP_RIGHT,
            borders::BOTTOM_LEFT,
            borders::BOTTOM_RIGHT,
            borders::HORIZONTAL,
            borders::VERTICAL,
        )
    } else {
        (
            borders_ascii::TOP_LEFT,
            borders_ascii::TOP_RIGHT,
            borders_ascii::BOTTOM_LEFT,
            borders_ascii::BOTTOM_RIGHT,
            borders_ascii::HORIZONTAL,
            borders_ascii::VERTICAL,
        )
    };

    let inner = body
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(title.width() + 2))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    let title_fill = inner.saturating_sub(title.width() + 2);
    out.push_str(&format!("{tl}{h} {title} {}{tr}\n", h.repeat(title_fill.saturating_sub(1))));
    for line in body.lines() {
        let pad = inner.saturating_sub(line.width() + 1);
        out.push_str(&format!("{v} {line}{}{v}\n", " ".repeat(pad)));
    }
    out.push_str(&format!("{bl}{}{br}\n", h.repeat(inner)));
    out
}

/// Status line: visible row count, filter state
pub fn render_status_bar(visible: usize, total: usize, query: Option<&str>) -> String {
    match query {
        Some(q) => format!("{visible} visible of {total} nodes, filtered by \"{q}\""),
        None => format!("{visible} visible of {total} nodes"),
    }
}

/// Keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[↑↓] Move    [Enter/Space] Toggle    [→] Open    [←] Close\n\
         (Type to search, Backspace to edit, Esc clears search or quits)",
    )
}
