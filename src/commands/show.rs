use std::path::Path;

use anyhow::Result;
use arbor::models::forest_count;
use arbor::{Config, StoreChange, TreeNode, TreeStateStore};
use serde::Serialize;

use crate::ui::json::emit_event;
use crate::ui::json::events::{ChangeEvent, CompleteEvent, DataEvent, StartEvent};
use crate::ui::theme::{icons, icons_ascii, pick};
use crate::ui::widgets::tree_view::{
    flatten_visible, render_panel, render_rows, render_status_bar,
};

use super::{open_store, OutputOptions};

/// What `arbor show` does to the tree before printing it
#[derive(Debug, Clone, Default)]
pub struct ShowRequest {
    pub toggles: Vec<String>,
    pub select: Option<String>,
    pub filter: Option<String>,
}

#[derive(Debug, Serialize)]
struct ShowData<'a> {
    query: Option<&'a str>,
    visible: usize,
    total: usize,
    selected: Option<TreeNode>,
    tree: &'a [TreeNode],
}

pub fn cmd_show(
    file: Option<&Path>,
    request: &ShowRequest,
    config: &Config,
    out: &OutputOptions,
) -> Result<()> {
    if out.json {
        emit_event(&StartEvent::new("show"))?;
    }

    let mut store = open_store(file, config)?;
    if out.json {
        store.subscribe(|change: &StoreChange| {
            if let Err(e) = emit_event(&ChangeEvent::new("show", change)) {
                tracing::warn!(error = %e, "failed to write change event");
            }
        });
    }

    let missing = apply_request(&mut store, request);
    if !out.json {
        let icon = pick(out.unicode(config), icons::WARNING, icons_ascii::WARNING);
        for id in &missing {
            eprintln!("{icon} No node with id '{id}'");
        }
    }

    let inspector = config.inspector();
    if out.json {
        let data = ShowData {
            query: store.query(),
            visible: flatten_visible(store.tree()).len(),
            total: forest_count(store.source()),
            selected: inspector.prepare_for_display(store.selected()),
            tree: store.tree(),
        };
        emit_event(&DataEvent::new("show", data))?;
        emit_event(&CompleteEvent::success("show"))?;
        return Ok(());
    }

    print!("{}", render_show(&store, config, out)?);
    Ok(())
}

/// Toggles in order, then the selection, then the filter.
/// Returns the ids that matched no node.
pub fn apply_request(store: &mut TreeStateStore, request: &ShowRequest) -> Vec<String> {
    let mut missing = Vec::new();

    for id in &request.toggles {
        if store.toggle_flip(id).is_none() {
            missing.push(id.clone());
        }
    }

    if let Some(id) = &request.select {
        let toggled = store.get(id).is_some_and(|n| n.toggled);
        if store.toggle(id, toggled).is_none() {
            missing.push(id.clone());
        }
    }

    if let Some(query) = &request.filter {
        store.set_filter(query);
    }

    missing
}

/// Tree rows, status line and inspector panel as plain text
pub fn render_show(store: &TreeStateStore, config: &Config, out: &OutputOptions) -> Result<String> {
    let decorators = out.decorators(config);
    let rows = flatten_visible(store.tree());

    let mut text = String::new();
    if rows.is_empty() {
        text.push_str("  (no matching nodes)\n");
    } else {
        text.push_str(&render_rows(&rows, None, &decorators, out.supports_color));
    }
    text.push('\n');
    text.push_str(&render_status_bar(
        rows.len(),
        forest_count(store.source()),
        store.query(),
    ));
    text.push_str("\n\n");
    text.push_str(&render_panel(
        "Node",
        &store.inspect(&config.inspector())?,
        out.unicode(config),
    ));
    Ok(text)
}
