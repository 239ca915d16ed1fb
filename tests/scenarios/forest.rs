//! Scenario: a YAML forest with a mix of user and generated ids
//!
//! 1. The bundled `demos/forest.yaml` loads as two roots
//! 2. User ids are kept and the rest are numbered in pre-order
//! 3. Filtering "BOB" reaches into both roots and drops empty branches
//! 4. Selecting a match in the filtered view survives clearing the filter

use std::path::Path;

use arbor::{load_dataset, NodeInspector, StoreOptions, TreeStateStore};

#[test]
fn scenario_yaml_forest_filter_and_select() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/forest.yaml");
    let roots = load_dataset(&path).unwrap();
    let mut store = TreeStateStore::new(roots, StoreOptions::default());

    let source = store.source();
    assert_eq!(source.len(), 2);
    assert_eq!(source[0].id.as_deref(), Some("docs"));
    assert_eq!(source[1].id.as_deref(), Some("<>__id4"));
    assert_eq!(store.get("beach").map(|n| n.name.as_str()), Some("beach.png"));

    assert_eq!(store.set_filter("BOB"), 2);
    let names: Vec<Vec<&str>> = store
        .tree()
        .iter()
        .map(|root| root.children().iter().map(|c| c.name.as_str()).collect())
        .collect();
    assert_eq!(names, vec![vec!["letters"], vec!["bobcat.jpg"]]);
    assert!(store.tree().iter().all(|root| root.toggled));

    store.toggle("<>__id6", true);
    store.clear_filter();
    assert_eq!(store.selected().map(|n| n.name.as_str()), Some("bobcat.jpg"));

    let inspector = NodeInspector::default();
    let text = store.inspect(&inspector).unwrap();
    assert!(text.contains("\"name\": \"bobcat.jpg\""));
    assert!(!text.contains("<>__id"));
}
