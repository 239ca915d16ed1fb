//! Property tests for toggling through the store.

use proptest::prelude::*;

use arbor::{StoreOptions, TreeNode, TreeStateStore};

use crate::strategies::{forest, ids, preorder};

/// A toggle request: which node (as an index into pre-order) and the
/// requested expansion state
fn toggles() -> impl Strategy<Value = Vec<(usize, bool)>> {
    proptest::collection::vec((any::<usize>(), any::<bool>()), 1..16)
}

fn active_ids(roots: &[TreeNode]) -> Vec<String> {
    preorder(roots)
        .into_iter()
        .filter(|n| n.active)
        .filter_map(|n| n.id.clone())
        .collect()
}

fn all_collapsed(node: &TreeNode) -> bool {
    !node.toggled && node.children().iter().all(all_collapsed)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: At most one node is active, and it is the store's selection.
    #[test]
    fn property_single_active_node(roots in forest(), requests in toggles()) {
        let mut store = TreeStateStore::new(roots, StoreOptions::default());
        let all = ids(store.source());

        for (pick, toggled) in requests {
            let id = &all[pick % all.len()];
            prop_assert!(store.toggle(id, toggled).is_some());

            let active = active_ids(store.source());
            prop_assert_eq!(active, vec![id.clone()]);
            prop_assert_eq!(store.selected_id(), Some(id.as_str()));
        }
    }

    /// PROPERTY: Opening a branch leaves every sibling subtree collapsed.
    #[test]
    fn property_opening_collapses_siblings(roots in forest(), requests in toggles()) {
        let mut store = TreeStateStore::new(roots, StoreOptions::default());
        let all = ids(store.source());

        for (pick, toggled) in requests {
            let id = all[pick % all.len()].clone();
            let outcome = store.toggle(&id, toggled);
            prop_assert!(outcome.is_some());
            if outcome.and_then(|o| o.toggled) != Some(true) {
                continue;
            }

            let siblings: &[TreeNode] = match store.parent_of(&id) {
                Some(parent) => parent.children(),
                None => store.source(),
            };
            for sibling in siblings.iter().filter(|s| s.id.as_deref() != Some(id.as_str())) {
                prop_assert!(all_collapsed(sibling), "sibling {:?} still open", sibling.id);
            }
            prop_assert!(store.get(&id).is_some_and(|n| n.toggled));
        }
    }

    /// PROPERTY: Toggling a leaf only moves the selection.
    #[test]
    fn property_leaf_toggle_keeps_expansion(roots in forest(), pick in any::<usize>()) {
        let mut store = TreeStateStore::new(roots, StoreOptions::default());
        let leaves: Vec<String> = preorder(store.source())
            .into_iter()
            .filter(|n| !n.is_branch())
            .filter_map(|n| n.id.clone())
            .collect();
        prop_assume!(!leaves.is_empty());

        let before: Vec<bool> = preorder(store.source()).iter().map(|n| n.toggled).collect();
        let outcome = store.toggle(&leaves[pick % leaves.len()], true);
        let after: Vec<bool> = preorder(store.source()).iter().map(|n| n.toggled).collect();

        prop_assert_eq!(outcome.and_then(|o| o.toggled), None);
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: An unknown id clears the selection and leaves the tree shape alone.
    #[test]
    fn property_unknown_id_deselects(roots in forest(), pick in any::<usize>()) {
        let mut store = TreeStateStore::new(roots, StoreOptions::default());
        let all = ids(store.source());
        store.toggle(&all[pick % all.len()], true);
        let expansion: Vec<bool> = preorder(store.source()).iter().map(|n| n.toggled).collect();

        prop_assert!(store.toggle("no such node", true).is_none());
        prop_assert!(store.selected_id().is_none());
        prop_assert!(active_ids(store.source()).is_empty());
        let after: Vec<bool> = preorder(store.source()).iter().map(|n| n.toggled).collect();
        prop_assert_eq!(expansion, after);
    }
}
