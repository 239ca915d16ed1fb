//! Core data model for Arbor
//!
//! A dataset is a forest of `TreeNode`s. Besides the fields the tree state
//! manager cares about, every node carries whatever extra fields the source
//! dataset had, so the inspector can echo them back untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A node in a hierarchical dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Unique id within the tree (user-supplied or synthetic)
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Display label
    pub name: String,
    /// Child nodes; `None` for leaves
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<TreeNode>>,
    /// Expansion state (meaningful only when `children` is present)
    #[serde(default, skip_serializing_if = "is_false")]
    pub toggled: bool,
    /// Whether this node is the current selection
    #[serde(default, skip_serializing_if = "is_false")]
    pub active: bool,
    /// Any other fields from the source dataset, in source order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Ids may be written as strings or integers in source data.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Signed(n) => n.to_string(),
        RawId::Unsigned(n) => n.to_string(),
    }))
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            children: None,
            toggled: false,
            active: false,
            extra: Map::new(),
        }
    }

    /// Create a branch node with the given children
    pub fn branch(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            children: Some(children),
            ..Self::new(name)
        }
    }

    /// Builder-style id setter
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder-style expansion setter
    pub fn with_toggled(mut self, toggled: bool) -> Self {
        self.toggled = toggled;
        self
    }

    /// Id as a string slice, if assigned
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True when the node has a `children` sequence, even an empty one
    pub fn is_branch(&self) -> bool {
        self.children.is_some()
    }

    /// True when the node has at least one child
    pub fn has_children(&self) -> bool {
        self.children.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Children as a slice (empty for leaves)
    pub fn children(&self) -> &[TreeNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Mutable children as a slice (empty for leaves)
    pub fn children_mut(&mut self) -> &mut [TreeNode] {
        self.children.as_deref_mut().unwrap_or(&mut [])
    }

    /// Copy of this node with `children` left empty (if it had any).
    ///
    /// Used by the filter to rebuild a subtree without cloning the parts
    /// it is about to drop.
    pub fn clone_shallow(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            children: self.children.as_ref().map(|_| Vec::new()),
            toggled: self.toggled,
            active: self.active,
            extra: self.extra.clone(),
        }
    }

    /// Force `toggled = false` on this node and every descendant
    pub fn collapse_subtree(&mut self) {
        self.toggled = false;
        for child in self.children_mut() {
            child.collapse_subtree();
        }
    }

    /// Number of nodes in this subtree, including self
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::count).sum::<usize>()
    }

    /// Pre-order visit of this subtree
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a TreeNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// Pre-order mutable visit of this subtree
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut TreeNode)) {
        visit(self);
        for child in self.children_mut() {
            child.walk_mut(visit);
        }
    }
}

/// Raw dataset shape: a lone root or a sequence of roots
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Dataset {
    Forest(Vec<TreeNode>),
    Single(Box<TreeNode>),
}

impl Dataset {
    /// Normalize to a sequence of roots
    pub fn into_roots(self) -> Vec<TreeNode> {
        match self {
            Dataset::Forest(roots) => roots,
            Dataset::Single(root) => vec![*root],
        }
    }
}

impl From<TreeNode> for Dataset {
    fn from(node: TreeNode) -> Self {
        Dataset::Single(Box::new(node))
    }
}

impl From<Vec<TreeNode>> for Dataset {
    fn from(roots: Vec<TreeNode>) -> Self {
        Dataset::Forest(roots)
    }
}

/// Total node count across a forest
pub fn forest_count(roots: &[TreeNode]) -> usize {
    roots.iter().map(TreeNode::count).sum()
}
