//! Rendering decorators for tree rows.
//!
//! The header decorator draws a folder or file icon in front of the label.
//! Decorators are plain configuration handed to the renderer.

use arbor::config::DisplayConfig;

use crate::ui::theme::{icons, icons_ascii, pick};

use super::rows::Row;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorators {
    pub folder_icon: &'static str,
    pub file_icon: &'static str,
    pub open_glyph: &'static str,
    pub closed_glyph: &'static str,
    pub cursor_glyph: &'static str,
    /// Append `(#id)` to every label
    pub show_ids: bool,
}

impl Decorators {
    pub fn new(supports_unicode: bool) -> Self {
        Self {
            folder_icon: pick(supports_unicode, icons::FOLDER, icons_ascii::FOLDER),
            file_icon: pick(supports_unicode, icons::FILE, icons_ascii::FILE),
            open_glyph: pick(supports_unicode, icons::EXPAND, icons_ascii::EXPAND),
            closed_glyph: pick(supports_unicode, icons::COLLAPSE, icons_ascii::COLLAPSE),
            cursor_glyph: pick(supports_unicode, icons::CURSOR, icons_ascii::CURSOR),
            show_ids: false,
        }
    }

    /// Decorators for the configured display, downgraded to ASCII when the
    /// terminal can't draw unicode.
    pub fn from_config(display: &DisplayConfig, supports_unicode: bool) -> Self {
        Self {
            show_ids: display.show_ids,
            ..Self::new(display.unicode && supports_unicode)
        }
    }

    pub fn with_show_ids(mut self, show_ids: bool) -> Self {
        self.show_ids = show_ids;
        self
    }

    /// Toggle glyph for branches, blank padding for leaves
    pub fn toggle(&self, row: &Row) -> String {
        if !row.is_branch {
            return " ".repeat(self.open_glyph.chars().count() + 1);
        }
        let glyph = if row.toggled {
            self.open_glyph
        } else {
            self.closed_glyph
        };
        format!("{glyph} ")
    }

    /// Icon and label
    pub fn header(&self, row: &Row) -> String {
        let icon = if row.is_branch {
            self.folder_icon
        } else {
            self.file_icon
        };
        match (&row.id, self.show_ids) {
            (Some(id), true) => format!("{icon} {} (#{id})", row.name),
            _ => format!("{icon} {}", row.name),
        }
    }
}
