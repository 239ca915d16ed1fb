//! Scenario: one open branch per level
//!
//! 1. folder2 is open, and so is a folder inside it
//! 2. The user opens folder1
//! 3. folder2 and everything below it close; folder1 is the selection

use arbor::{StoreChange, StoreOptions, TreeNode, TreeStateStore};
use std::cell::RefCell;
use std::rc::Rc;

use crate::common::*;

fn folders() -> Vec<TreeNode> {
    vec![TreeNode::branch(
        "root",
        vec![
            TreeNode::branch("folder1", vec![TreeNode::new("f1.txt")]).with_id("folder1"),
            TreeNode::branch(
                "folder2",
                vec![TreeNode::branch("nested", vec![TreeNode::new("deep.txt")])
                    .with_id("nested")
                    .with_toggled(true)],
            )
            .with_id("folder2")
            .with_toggled(true),
        ],
    )
    .with_id("root")
    .with_toggled(true)]
}

#[test]
fn scenario_opening_folder_collapses_sibling_subtree() {
    let mut store = TreeStateStore::new(folders(), StoreOptions::default());
    let changes = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&changes);
    store.subscribe(move |change: &StoreChange| seen.borrow_mut().push(change.clone()));

    let outcome = store.toggle("folder1", true).unwrap();

    assert_eq!(outcome.collapsed, vec!["folder2".to_string()]);
    assert!(store.get("folder1").unwrap().toggled);
    assert!(!store.get("folder2").unwrap().toggled);
    assert!(!store.get("nested").unwrap().toggled);
    assert!(store.get("root").unwrap().toggled);
    assert_eq!(store.selected_id(), Some("folder1"));

    let changes = changes.borrow();
    assert_eq!(changes.len(), 2);
    assert!(matches!(changes[0], StoreChange::Loaded { nodes: 6, .. }));
    assert!(matches!(
        &changes[1],
        StoreChange::Toggled { id, toggled: Some(true), .. } if id == "folder1"
    ));
}

#[test]
fn scenario_toggles_from_the_command_line() {
    let env = TestEnv::new();
    env.write("folders.json", FOLDERS_JSON);

    let result = env.run(&["show", "folders.json", "-t", "folder2", "-t", "folder1"]);
    assert!(result.success, "stderr:\n{}", result.stderr);

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(
        &lines[..4],
        &[
            "  [-] [D] root",
            "    [-] [D] folder1 *",
            "          [F] f1.txt",
            "    [+] [D] folder2",
        ]
    );
    // The inspector shows folder1 without its synthetic child id
    assert!(result.stdout.contains("\"id\": \"folder1\""));
    assert!(!result.stdout.contains("<>__id"));
}
