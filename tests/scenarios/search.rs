//! Scenario: searching a small tree
//!
//! 1. A tree arrives with no ids
//! 2. Loading fills in ids for every node
//! 3. Typing "bo" keeps the root as an ancestor and only `bob` below it
//! 4. Clearing the search brings the full tree back

use arbor::{StoreOptions, TreeNode, TreeStateStore};

use crate::common::*;

#[test]
fn scenario_filter_keeps_ancestors_of_matches() {
    let root: TreeNode = serde_json::from_str(
        r#"{ "name": "root", "children": [{ "name": "a" }, { "name": "bob" }] }"#,
    )
    .unwrap();
    let mut store = TreeStateStore::new(vec![root], StoreOptions::default());

    let children = store.source()[0].children();
    assert!(children.iter().all(|c| c.id.is_some()));
    assert_ne!(children[0].id, children[1].id);
    let bob_id = children[1].id.clone();

    assert_eq!(store.set_filter("bo"), 1);
    let tree = store.tree();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].name, "root");
    let kept: Vec<(&str, Option<&String>)> = tree[0]
        .children()
        .iter()
        .map(|c| (c.name.as_str(), c.id.as_ref()))
        .collect();
    assert_eq!(kept, vec![("bob", bob_id.as_ref())]);
    assert!(tree[0].toggled, "path to the match is opened");

    store.set_filter("");
    assert_eq!(store.tree()[0].children().len(), 2);
}

#[test]
fn scenario_search_from_the_command_line() {
    let env = TestEnv::new();
    env.write("docs.json", DOCS_JSON);

    let result = env.run(&["show", "docs.json", "--filter", "BO"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines[0], "  [-] [D] docs");
    assert_eq!(lines[1], "        [F] bob.md");
    assert!(!result.stdout.contains("alice.md"));
    assert!(!result.stdout.contains("main.rs"));
    assert!(result.stdout.contains("2 visible of 5 nodes, filtered by \"BO\""));
}

#[test]
fn scenario_selected_node_survives_search() {
    let env = TestEnv::new();
    env.write("docs.json", DOCS_JSON);

    // alice.md is the second synthetic id: docs, bob.md, alice.md
    let result = env.run(&["--json", "show", "docs.json", "--select", "<>__id2", "--filter", "bo"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let data = result.event("data");
    assert_eq!(data["query"], "bo");
    assert_eq!(data["selected"]["name"], "alice.md");
    assert!(data["selected"].get("id").is_none());
}
