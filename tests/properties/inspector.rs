//! Property tests for the inspector display transform.

use proptest::prelude::*;

use arbor::models::forest_count;
use arbor::tree::{assign_ids, is_synthetic_id, NodeInspector, SYNTHETIC_ID_PREFIX};
use arbor::{StoreOptions, TreeStateStore};

use crate::strategies::{forest, ids, preorder};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: No synthetic id reaches the display, and nothing else is lost.
    #[test]
    fn property_display_strips_synthetic_ids(roots in forest(), pick in any::<usize>()) {
        let store = TreeStateStore::new(roots, StoreOptions::default());
        let all = ids(store.source());
        let node = store.get(&all[pick % all.len()]).unwrap();

        let prepared = NodeInspector::default().prepare_for_display(Some(node)).unwrap();
        for n in preorder(std::slice::from_ref(&prepared)) {
            let synthetic = n.id.as_deref().is_some_and(|id| is_synthetic_id(id, SYNTHETIC_ID_PREFIX));
            prop_assert!(!synthetic, "{} kept {:?}", n.name, n.id);
        }

        let names = |n: &arbor::TreeNode| -> Vec<String> {
            preorder(std::slice::from_ref(n)).iter().map(|n| n.name.clone()).collect()
        };
        prop_assert_eq!(names(&prepared), names(node));
        prop_assert_eq!(forest_count(std::slice::from_ref(&prepared)), node.count());
        // The stored node keeps its id
        prop_assert!(node.id.is_some());
    }

    /// PROPERTY: Rendering produces JSON that reads back as the displayed node.
    #[test]
    fn property_render_is_valid_json(roots in forest(), pick in any::<usize>(), indent in 0usize..8) {
        let store = TreeStateStore::new(roots, StoreOptions::default());
        let all = ids(store.source());
        let node = store.get(&all[pick % all.len()]).unwrap();
        let inspector = NodeInspector::default().with_indent(indent);

        let text = inspector.render(Some(node)).unwrap();
        let parsed: arbor::TreeNode = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(Some(parsed), inspector.prepare_for_display(Some(node)));
    }

    /// PROPERTY: A tree whose ids all came from the user displays unchanged.
    #[test]
    fn property_user_ids_survive_display(mut roots in forest()) {
        assign_ids(&mut roots, "user-");
        let inspector = NodeInspector::default();
        for root in &roots {
            let displayed = inspector.prepare_for_display(Some(root));
            prop_assert_eq!(displayed.as_ref(), Some(root));
        }
    }
}
