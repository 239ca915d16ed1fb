//! Property tests for name filtering.

use std::collections::HashSet;

use proptest::prelude::*;

use arbor::tree::{assign_ids, expand_filtered_nodes, filter_tree, name_matches, SYNTHETIC_ID_PREFIX};
use arbor::{StoreOptions, TreeNode, TreeStateStore};

use crate::strategies::{forest, name, preorder};

fn leads_to_match(node: &TreeNode, query: &str) -> bool {
    name_matches(node, query) || node.children().iter().any(|c| leads_to_match(c, query))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every kept node matches or has a kept descendant that does.
    #[test]
    fn property_filter_is_sound(roots in forest(), query in name()) {
        for node in preorder(&filter_tree(&roots, &query)) {
            prop_assert!(leads_to_match(node, &query), "{} kept for {}", node.name, query);
        }
    }

    /// PROPERTY: Every matching node survives the filter.
    #[test]
    fn property_filter_is_complete(mut roots in forest(), query in name()) {
        assign_ids(&mut roots, SYNTHETIC_ID_PREFIX);
        let filtered = filter_tree(&roots, &query);
        let kept: HashSet<&str> = preorder(&filtered)
            .into_iter()
            .filter_map(|n| n.id.as_deref())
            .collect();

        for node in preorder(&roots).into_iter().filter(|n| name_matches(n, &query)) {
            let id = node.id.as_deref().unwrap_or_default();
            prop_assert!(kept.contains(id), "{} ({}) dropped", node.name, id);
        }
    }

    /// PROPERTY: Matching ignores case.
    #[test]
    fn property_filter_ignores_case(roots in forest(), query in name()) {
        prop_assert_eq!(
            filter_tree(&roots, &query.to_uppercase()),
            filter_tree(&roots, &query.to_lowercase())
        );
    }

    /// PROPERTY: After expansion a node is open exactly when it still has
    /// children.
    #[test]
    fn property_expanded_paths_lead_to_matches(roots in forest(), query in name()) {
        let expanded = expand_filtered_nodes(filter_tree(&roots, &query), &query);
        for node in preorder(&expanded) {
            prop_assert_eq!(node.toggled, node.has_children(), "{}", node.name);
        }
    }

    /// PROPERTY: Filtering through the store never touches the source forest,
    /// and a blank query shows it again.
    #[test]
    fn property_store_filter_keeps_source(roots in forest(), query in name()) {
        let mut store = TreeStateStore::new(roots, StoreOptions::default());
        let source = store.source().to_vec();

        store.set_filter(&query);
        prop_assert_eq!(store.source(), source.as_slice());

        store.set_filter("   ");
        prop_assert!(!store.is_filtered());
        prop_assert_eq!(store.tree(), source.as_slice());
    }
}
