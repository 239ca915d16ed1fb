//! Tree View Widget
//!
//! Interactive terminal view over a `TreeStateStore`: a search box, the
//! visible rows, and an inspector panel for the selected node.
//!
//! # Module Structure
//!
//! - `rows` - flattening the visible part of the forest
//! - `decorators` - header icons and toggle glyphs
//! - `render` - string rendering of rows, panels and bars
//! - `view` - cursor, search buffer and action handling
//! - `input` - keyboard mapping and the interactive loop

mod decorators;
mod input;
mod render;
mod rows;
mod view;

pub use decorators::Decorators;
pub use input::run_interactive;
pub use render::{render_panel, render_rows, render_status_bar};
pub use rows::flatten_visible;
pub use view::TreeView;
