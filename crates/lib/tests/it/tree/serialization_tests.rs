//! Tests for handing an assembled tree to serde.

use pathtree::{PathTree, tree::Node};
use serde_json::{Value as Json, json};

use crate::helpers::*;

#[test]
fn test_to_json_matches_structure() {
    let tree = setup_tree();
    assert_eq!(tree.to_json().unwrap(), setup_tree_json());
}

#[test]
fn test_to_json_unset_root_is_empty_object() {
    let tree = PathTree::new();
    assert_eq!(tree.to_json().unwrap(), json!({}));
}

#[test]
fn test_into_root_serializes_as_plain_map() {
    let mut tree = PathTree::new();
    tree.set("server.port", 8080).set("server.tls", false);

    let root = tree.into_root().unwrap();
    let text = serde_json::to_string(&root).unwrap();
    let reparsed: Json = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, json!({ "server": { "port": 8080, "tls": false } }));
}

#[test]
fn test_deserialize_node_seeds_tree() {
    let root: Node<Json> = serde_json::from_value(json!({
        "server": { "port": 8080 },
        "name": "svc",
    }))
    .unwrap();

    let mut tree = PathTree::from(root);
    tree.set("server.host", "localhost");

    assert_leaf(&tree, "server.port", json!(8080));
    assert_leaf(&tree, "server.host", json!("localhost"));
    assert_leaf(&tree, "name", json!("svc"));
    assert!(tree.err().is_ok());
}

#[test]
fn test_custom_leaf_type_serializes() {
    let mut tree = PathTree::<String>::default();
    tree.set("a.b", "x").set("a.c", "y");

    assert_eq!(tree.to_json().unwrap(), json!({ "a": { "b": "x", "c": "y" } }));
}
