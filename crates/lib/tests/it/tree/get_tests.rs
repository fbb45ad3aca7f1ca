//! Tests for reading values out of a PathTree.

use pathtree::{
    PathTree,
    tree::{Node, ValueRef},
};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_get_empty_tree() {
    let tree = PathTree::new();

    assert_absent(&tree, "");
    assert_absent(&tree, "key");
    assert_absent(&tree, "a.b.c");
    assert!(tree.err().is_ok());
}

#[test]
fn test_get_root_returns_whole_tree() {
    let tree = setup_tree();

    let root = tree.get("").and_then(|v| v.as_node()).unwrap();
    assert_eq!(root.len(), 2);
    assert_eq!(Some(root), tree.root());
    assert_node_json(&tree, "", setup_tree_json());
}

#[test]
fn test_get_root_dot_matches_empty() {
    let tree = setup_tree();
    assert_eq!(tree.get("."), tree.get(""));
}

#[test]
fn test_get_missing_paths_are_absent_not_errors() {
    let tree = setup_tree();

    assert_absent(&tree, "nope");
    assert_absent(&tree, "parent.nope");
    assert_absent(&tree, "parent.nope.deeper");
    assert!(tree.err().is_ok());
}

#[test]
fn test_get_nested_node() {
    let tree = setup_tree();

    match tree.get("parent.foo") {
        Some(ValueRef::Node(node)) => assert_eq!(node.len(), 1),
        other => panic!("expected a node, got {other:?}"),
    }
    assert_node_json(&tree, "parent", json!({ "key": 5, "foo": { "key": 15 } }));
}

#[test]
fn test_get_through_leaf_records_conflict() {
    let tree = setup_tree();

    assert_absent(&tree, "key.child");
    assert_absent(&tree, "parent.key.deeper.still");

    let conflicts = tree.conflicts();
    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].path(), Some("key"));
    assert_eq!(conflicts[1].path(), Some("parent.key"));
}

#[test]
fn test_get_does_not_modify_tree() {
    let tree = setup_tree();
    let before = tree.root().cloned();

    let _ = tree.get("key.child");
    let _ = tree.get("missing.path");

    assert_eq!(tree.root().cloned(), before);
}

#[test]
fn test_typed_accessors() {
    let tree = setup_tree();

    assert_eq!(tree.get_leaf("parent.key"), Some(&json!(5)));
    assert_eq!(tree.get_leaf("parent"), None);
    assert_eq!(tree.get_node("parent.foo").map(Node::len), Some(1));
    assert_eq!(tree.get_node("key"), None);

    assert!(tree.contains("parent.foo.key"));
    assert!(!tree.contains("parent.foo.bar"));
}

#[test]
fn test_value_ref_to_owned() {
    let tree = setup_tree();

    let owned = tree.get("parent.foo").unwrap().to_owned_value();
    assert_eq!(owned.as_node().map(Node::len), Some(1));
    assert_eq!(
        tree.get("key").unwrap().to_owned_value().into_leaf(),
        Some(json!(1))
    );
}
