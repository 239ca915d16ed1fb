//! Visible rows of a forest.

use arbor::TreeNode;

/// A flattened representation of a visible tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Depth level (0 = root)
    pub depth: usize,
    pub id: Option<String>,
    pub name: String,
    pub is_branch: bool,
    pub toggled: bool,
    pub active: bool,
}

/// Depth-first rows, descending only into toggled branches
pub fn flatten_visible(roots: &[TreeNode]) -> Vec<Row> {
    let mut rows = Vec::new();
    for root in roots {
        push_rows(root, 0, &mut rows);
    }
    rows
}

fn push_rows(node: &TreeNode, depth: usize, rows: &mut Vec<Row>) {
    rows.push(Row {
        depth,
        id: node.id.clone(),
        name: node.name.clone(),
        is_branch: node.is_branch(),
        toggled: node.toggled,
        active: node.active,
    });

    if node.toggled {
        for child in node.children() {
            push_rows(child, depth + 1, rows);
        }
    }
}
