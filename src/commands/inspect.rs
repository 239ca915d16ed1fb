use std::path::Path;

use anyhow::Result;
use arbor::{ArborError, Config, TreeNode};
use serde::Serialize;

use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

use super::{open_store, OutputOptions};

#[derive(Debug, Serialize)]
struct InspectData<'a> {
    id: &'a str,
    node: Option<TreeNode>,
}

/// Print one node the way the inspector panel shows it. The id may be a
/// synthetic one, as listed by `arbor show --show-ids`.
pub fn cmd_inspect(
    file: Option<&Path>,
    id: &str,
    config: &Config,
    out: &OutputOptions,
) -> Result<()> {
    if out.json {
        emit_event(&StartEvent::new("inspect"))?;
    }

    let store = open_store(file, config)?;
    let node = store.get(id).ok_or_else(|| ArborError::NodeNotFound {
        id: id.to_string(),
    })?;
    let inspector = config.inspector();

    if out.json {
        let data = InspectData {
            id,
            node: inspector.prepare_for_display(Some(node)),
        };
        emit_event(&DataEvent::new("inspect", data))?;
        emit_event(&CompleteEvent::success("inspect"))?;
        return Ok(());
    }

    println!("{}", inspector.render(Some(node))?);
    Ok(())
}
