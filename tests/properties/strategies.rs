//! Shared generators for random forests.

use proptest::prelude::*;

use arbor::TreeNode;

/// Short names over a tiny alphabet so queries hit often
pub fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[abcAB]{1,4}").unwrap()
}

/// Missing or empty ids; both must be filled in on load
fn raw_id() -> impl Strategy<Value = Option<String>> {
    prop_oneof![4 => Just(None), 1 => Just(Some(String::new()))]
}

pub fn node() -> impl Strategy<Value = TreeNode> {
    let leaf = (name(), raw_id()).prop_map(|(name, id)| TreeNode {
        id,
        ..TreeNode::new(name)
    });

    leaf.prop_recursive(4, 48, 5, |inner| {
        (
            name(),
            raw_id(),
            proptest::collection::vec(inner, 0..5),
            any::<bool>(),
        )
            .prop_map(|(name, id, children, toggled)| TreeNode {
                id,
                ..TreeNode::branch(name, children).with_toggled(toggled)
            })
    })
}

pub fn forest() -> impl Strategy<Value = Vec<TreeNode>> {
    proptest::collection::vec(node(), 1..4)
}

/// Every node of the forest in pre-order
pub fn preorder(roots: &[TreeNode]) -> Vec<&TreeNode> {
    let mut nodes = Vec::new();
    for root in roots {
        root.walk(&mut |n| nodes.push(n));
    }
    nodes
}

/// Ids of every node in pre-order
pub fn ids(roots: &[TreeNode]) -> Vec<String> {
    preorder(roots)
        .into_iter()
        .filter_map(|n| n.id.clone())
        .collect()
}
