//! Property tests for synthetic id assignment.

use std::collections::HashSet;

use proptest::prelude::*;

use arbor::models::forest_count;
use arbor::tree::{assign_ids, is_synthetic_id, IdAssigner, SYNTHETIC_ID_PREFIX};

use crate::strategies::{forest, ids, preorder};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After assignment every node has a non-empty id and no two
    /// nodes share one.
    #[test]
    fn property_assigned_ids_are_unique(mut roots in forest()) {
        let assigned = assign_ids(&mut roots, SYNTHETIC_ID_PREFIX);
        let all = ids(&roots);

        prop_assert_eq!(all.len(), forest_count(&roots));
        prop_assert_eq!(assigned, all.len());
        prop_assert!(all.iter().all(|id| !id.is_empty()));
        let distinct: HashSet<&String> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());
    }

    /// PROPERTY: Synthetic ids follow pre-order, starting at 0.
    #[test]
    fn property_ids_follow_preorder(mut roots in forest()) {
        assign_ids(&mut roots, SYNTHETIC_ID_PREFIX);
        for (i, node) in preorder(&roots).into_iter().enumerate() {
            prop_assert_eq!(node.id.clone(), Some(format!("{SYNTHETIC_ID_PREFIX}{i}")));
        }
    }

    /// PROPERTY: User ids that look generated are never handed out again.
    #[test]
    fn property_generated_ids_avoid_user_ids(mut roots in forest(), pick in 0usize..8) {
        let count = forest_count(&roots);
        let mut seen = 0;
        for root in roots.iter_mut() {
            root.walk_mut(&mut |node| {
                if seen % 3 == 0 {
                    node.id = Some(format!("{SYNTHETIC_ID_PREFIX}{}", (seen + pick) % count));
                }
                seen += 1;
            });
        }

        assign_ids(&mut roots, SYNTHETIC_ID_PREFIX);
        let all = ids(&roots);
        let distinct: HashSet<&String> = all.iter().collect();
        prop_assert_eq!(distinct.len(), all.len());
    }

    /// PROPERTY: A second pass over an assigned forest changes nothing.
    #[test]
    fn property_assignment_is_idempotent(mut roots in forest()) {
        let mut assigner = IdAssigner::default();
        assigner.assign(&mut roots);
        let before = roots.clone();

        prop_assert_eq!(assigner.assign(&mut roots), 0);
        prop_assert_eq!(roots, before);
    }

    /// PROPERTY: A custom prefix is recognized as synthetic, the default is not.
    #[test]
    fn property_custom_prefix(mut roots in forest()) {
        assign_ids(&mut roots, "node-");
        for id in ids(&roots) {
            prop_assert!(is_synthetic_id(&id, "node-"));
            prop_assert!(!is_synthetic_id(&id, SYNTHETIC_ID_PREFIX));
        }
    }
}
