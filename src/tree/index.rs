//! Id lookup table for a forest.
//!
//! Maps every id to its index path (root index, child index, ...) and to its
//! parent's id. The table is built when a forest enters the store and stays
//! valid for that forest's lifetime: toggling flips flags, never the shape.

use std::collections::HashMap;

use crate::models::TreeNode;

#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    paths: HashMap<String, Vec<usize>>,
    parents: HashMap<String, String>,
}

impl TreeIndex {
    /// Index every id in the forest. On duplicate ids the first one in
    /// pre-order wins.
    pub fn build(roots: &[TreeNode]) -> Self {
        let mut index = Self::default();
        for (i, root) in roots.iter().enumerate() {
            index.insert(root, None, vec![i]);
        }
        index
    }

    fn insert(&mut self, node: &TreeNode, parent: Option<&str>, path: Vec<usize>) {
        if let Some(id) = node.id() {
            if self.paths.contains_key(id) {
                tracing::warn!(id, "duplicate node id; later occurrence is unreachable by id");
            } else {
                self.paths.insert(id.to_string(), path.clone());
                if let Some(parent) = parent {
                    self.parents.insert(id.to_string(), parent.to_string());
                }
            }
        }

        for (i, child) in node.children().iter().enumerate() {
            let mut child_path = path.clone();
            child_path.push(i);
            self.insert(child, node.id(), child_path);
        }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.paths.contains_key(id)
    }

    /// Index path of the node with this id
    pub fn path_of(&self, id: &str) -> Option<&[usize]> {
        self.paths.get(id).map(Vec::as_slice)
    }

    /// Parent id, or `None` for roots and unknown ids
    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.parents.get(id).map(String::as_str)
    }

    /// True when the id belongs to a root node
    pub fn is_root(&self, id: &str) -> bool {
        self.path_of(id).is_some_and(|p| p.len() == 1)
    }

    pub fn get<'a>(&self, roots: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
        node_at(roots, self.path_of(id)?)
    }

    pub fn get_mut<'a>(&self, roots: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
        node_at_mut(roots, self.path_of(id)?)
    }
}

/// Resolve an index path against a forest
pub fn node_at<'a>(roots: &'a [TreeNode], path: &[usize]) -> Option<&'a TreeNode> {
    let (first, rest) = path.split_first()?;
    let mut node = roots.get(*first)?;
    for idx in rest {
        node = node.children().get(*idx)?;
    }
    Some(node)
}

/// Resolve an index path against a forest, mutably
pub fn node_at_mut<'a>(roots: &'a mut [TreeNode], path: &[usize]) -> Option<&'a mut TreeNode> {
    let (first, rest) = path.split_first()?;
    let mut node = roots.get_mut(*first)?;
    for idx in rest {
        node = node.children_mut().get_mut(*idx)?;
    }
    Some(node)
}

/// The sibling sequence containing the node at `path`: its parent's
/// children, or the roots themselves for a root path.
pub fn siblings_mut<'a>(roots: &'a mut [TreeNode], path: &[usize]) -> Option<&'a mut [TreeNode]> {
    match path.split_last() {
        None => None,
        Some((_, [])) => Some(roots),
        Some((_, parent)) => node_at_mut(roots, parent).map(TreeNode::children_mut),
    }
}
