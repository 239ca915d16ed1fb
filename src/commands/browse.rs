use std::path::Path;

use anyhow::Result;
use arbor::Config;

use crate::ui::widgets::tree_view::{run_interactive, TreeView};

use super::show::{cmd_show, ShowRequest};
use super::{open_store, OutputOptions};

/// Interactive tree browser. Without a terminal (pipes, CI, `--json`) it
/// prints the same output as `arbor show`.
pub fn cmd_browse(file: Option<&Path>, config: &Config, out: &OutputOptions) -> Result<()> {
    if out.json || !out.is_tty {
        tracing::info!("not a terminal, printing the tree instead");
        return cmd_show(file, &ShowRequest::default(), config, out);
    }

    let store = open_store(file, config)?;
    let mut view = TreeView::new(store, config.inspector(), out.decorators(config));
    run_interactive(&mut view, out.unicode(config), out.supports_color)
}
