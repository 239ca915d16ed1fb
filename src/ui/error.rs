use arbor::ArborError;
use crossterm::style::Stylize;

use crate::ui::theme::{colors, icons, icons_ascii, pick};
use crate::ui::widgets::tree_view::render_panel;

/// Render an error for the terminal, with a fix hint for the errors users
/// can act on.
pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(arbor) = err.downcast_ref::<ArborError>() else {
        let icon = pick(supports_unicode, icons::ERROR, icons_ascii::ERROR);
        return format!("{icon} {err:#}\n");
    };

    let mut body = String::new();
    if let Some(file) = arbor.file() {
        body.push_str(&format!("{}\n\n", file.display()));
    }
    body.push_str(&arbor.to_string());
    if let Some(fix) = fix_hint(arbor) {
        body.push_str(&format!("\n\nFIX: {fix}"));
    }

    let panel = render_panel("ERROR", &body, supports_unicode);
    if supports_color {
        panel.with(colors::ERROR).to_string()
    } else {
        panel
    }
}

fn fix_hint(err: &ArborError) -> Option<&'static str> {
    match err {
        ArborError::UnsupportedFormat { .. } => {
            Some("Rename the dataset to .json, .yaml, .yml or .toml.")
        }
        ArborError::EmptyDataset { .. } => Some("Add at least one node with a `name`."),
        ArborError::InvalidDataset { .. } => {
            Some("Every node needs a `name`; `children` must be a list of nodes.")
        }
        ArborError::InvalidConfig { .. } => {
            Some("Check the [ids], [filter] and [display] sections of the config.")
        }
        ArborError::NodeNotFound { .. } => {
            Some("Run `arbor show --show-ids` to list the ids in this dataset.")
        }
        ArborError::Io(_) | ArborError::Json(_) => None,
    }
}
