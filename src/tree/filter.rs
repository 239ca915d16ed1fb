//! Tree filtering by name.
//!
//! Matching is a case-insensitive substring test on `name`. A node survives
//! the filter when it matches or when one of its descendants survives; the
//! result is always a fresh copy and the source forest is never touched.

use crate::models::TreeNode;

/// Trim a raw query; a blank query means "no filter".
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Case-insensitive substring match against the node's name
pub fn name_matches(node: &TreeNode, query: &str) -> bool {
    contains_folded(&node.name, &query.to_lowercase())
}

fn contains_folded(name: &str, needle_lower: &str) -> bool {
    name.to_lowercase().contains(needle_lower)
}

/// Build a filtered copy of the forest. Roots with nothing matching are
/// dropped, so the result may be empty.
pub fn filter_tree(roots: &[TreeNode], query: &str) -> Vec<TreeNode> {
    let needle = query.to_lowercase();
    let filtered: Vec<TreeNode> = roots
        .iter()
        .filter_map(|root| filter_node(root, &needle))
        .collect();
    tracing::debug!(query, roots = filtered.len(), "filtered tree");
    filtered
}

fn filter_node(node: &TreeNode, needle: &str) -> Option<TreeNode> {
    let self_match = contains_folded(&node.name, needle);

    if !node.is_branch() {
        return self_match.then(|| node.clone());
    }

    let kept: Vec<TreeNode> = node
        .children()
        .iter()
        .filter_map(|child| filter_node(child, needle))
        .collect();

    if !self_match && kept.is_empty() {
        return None;
    }

    let mut copy = node.clone_shallow();
    copy.children = Some(kept);
    Some(copy)
}

/// True when the node or anything below it matches
fn leads_to_match(node: &TreeNode, needle: &str) -> bool {
    contains_folded(&node.name, needle)
        || node.children().iter().any(|c| leads_to_match(c, needle))
}

/// Expand the paths that lead to matches.
///
/// Every node with surviving children is opened. Branches whose children
/// were all filtered away stay closed.
pub fn expand_filtered_nodes(roots: Vec<TreeNode>, query: &str) -> Vec<TreeNode> {
    let needle = query.to_lowercase();
    roots
        .into_iter()
        .map(|root| expand_node(root, &needle))
        .collect()
}

fn expand_node(mut node: TreeNode, needle: &str) -> TreeNode {
    let Some(children) = node.children.take() else {
        node.toggled = false;
        return node;
    };

    let matching: Vec<TreeNode> = children
        .into_iter()
        .filter(|c| leads_to_match(c, needle))
        .map(|c| expand_node(c, needle))
        .collect();

    node.toggled = !matching.is_empty();
    node.children = Some(matching);
    node
}

/// Number of nodes in the forest whose own name matches
pub fn count_matches(roots: &[TreeNode], query: &str) -> usize {
    let needle = query.to_lowercase();
    let mut count = 0;
    for root in roots {
        root.walk(&mut |n| {
            if contains_folded(&n.name, &needle) {
                count += 1;
            }
        });
    }
    count
}
