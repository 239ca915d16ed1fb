//! Toggle handling: selection plus single-branch expansion.
//!
//! A toggle always moves the selection to the toggled node. On a branch it
//! also sets the expansion state, and opening a branch collapses every other
//! branch at the same level, nested expansions included.

use serde::Serialize;

use crate::models::TreeNode;

use super::index::{siblings_mut, TreeIndex};

/// What a toggle did to the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleOutcome {
    /// Id of the newly selected node
    pub id: String,
    /// New expansion state; `None` when the node is a leaf
    pub toggled: Option<bool>,
    /// Siblings that were open and got collapsed
    pub collapsed: Vec<String>,
}

/// Apply a user toggle to `roots`.
///
/// `previous_active` loses its `active` flag first. Returns `None` when
/// `node_id` is not in the tree; the previous selection is still cleared in
/// that case and nothing else changes.
pub fn on_toggle(
    roots: &mut [TreeNode],
    index: &TreeIndex,
    previous_active: Option<&str>,
    node_id: &str,
    toggled: bool,
) -> Option<ToggleOutcome> {
    if let Some(prev) = previous_active.and_then(|id| index.get_mut(roots, id)) {
        prev.active = false;
    }

    let path = index.path_of(node_id)?;
    let node = index.get_mut(roots, node_id)?;
    node.active = true;

    if !node.is_branch() {
        return Some(ToggleOutcome {
            id: node_id.to_string(),
            toggled: None,
            collapsed: Vec::new(),
        });
    }

    node.toggled = toggled;
    let collapsed = if toggled {
        collapse_siblings(roots, path)
    } else {
        Vec::new()
    };

    Some(ToggleOutcome {
        id: node_id.to_string(),
        toggled: Some(toggled),
        collapsed,
    })
}

/// Collapse every sibling of the node at `path`, and their subtrees.
/// Returns the ids of siblings that were open.
fn collapse_siblings(roots: &mut [TreeNode], path: &[usize]) -> Vec<String> {
    let Some(&own) = path.last() else {
        return Vec::new();
    };
    let Some(siblings) = siblings_mut(roots, path) else {
        return Vec::new();
    };

    let mut collapsed = Vec::new();
    for (i, sibling) in siblings.iter_mut().enumerate() {
        if i == own {
            continue;
        }
        if sibling.toggled {
            if let Some(id) = sibling.id() {
                collapsed.push(id.to_string());
            }
        }
        sibling.collapse_subtree();
    }
    collapsed
}
