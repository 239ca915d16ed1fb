//! Display transform for the selected node.
//!
//! The inspector shows a node's subtree the way it appeared in the source
//! dataset: synthetic ids are stripped, user ids and extra fields are kept.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::ArborResult;
use crate::models::TreeNode;

use super::ids::{is_synthetic_id, SYNTHETIC_ID_PREFIX};

/// Shown when nothing is selected yet
pub const HELP_MSG: &str = "Select A Node To See Its Data Structure Here...";

#[derive(Debug, Clone)]
pub struct NodeInspector {
    id_prefix: String,
    indent: usize,
    help_message: String,
}

impl Default for NodeInspector {
    fn default() -> Self {
        Self {
            id_prefix: SYNTHETIC_ID_PREFIX.to_string(),
            indent: 4,
            help_message: HELP_MSG.to_string(),
        }
    }
}

impl NodeInspector {
    pub fn new(id_prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: id_prefix.into(),
            ..Self::default()
        }
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_help_message(mut self, message: impl Into<String>) -> Self {
        self.help_message = message.into();
        self
    }

    pub fn help_message(&self) -> &str {
        &self.help_message
    }

    /// Deep copy of `node` with synthetic ids removed, or `None` when there
    /// is no selection.
    pub fn prepare_for_display(&self, node: Option<&TreeNode>) -> Option<TreeNode> {
        let mut copy = node?.clone();
        copy.walk_mut(&mut |n| {
            if n.id().is_some_and(|id| is_synthetic_id(id, &self.id_prefix)) {
                n.id = None;
            }
        });
        Some(copy)
    }

    /// Pretty-printed JSON of the prepared node, or the help message
    pub fn render(&self, node: Option<&TreeNode>) -> ArborResult<String> {
        match self.prepare_for_display(node) {
            Some(prepared) => self.to_pretty_json(&prepared),
            None => Ok(self.help_message.clone()),
        }
    }

    fn to_pretty_json(&self, value: &impl Serialize) -> ArborResult<String> {
        let indent = " ".repeat(self.indent);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Convenience wrapper using the default prefix
pub fn prepare_for_display(node: Option<&TreeNode>) -> Option<TreeNode> {
    NodeInspector::default().prepare_for_display(node)
}
