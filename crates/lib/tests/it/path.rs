//! Path parsing and how parsed paths address a tree.

use pathtree::{PathTree, tree::Path};
use serde_json::json;

use crate::helpers::*;

#[test]
fn test_parse_drops_empty_segments() {
    assert!(Path::parse("").is_root());
    assert!(Path::parse(".").is_root());
    assert_eq!(Path::parse(".user").segments(), ["user"]);
    assert_eq!(Path::parse("user.").segments(), ["user"]);
    assert_eq!(Path::parse("user..profile").segments(), ["user", "profile"]);
    assert_eq!(Path::parse("user.profile.name").to_string(), "user.profile.name");
}

#[test]
fn test_split_last_names_parent_chain() {
    let path = Path::parse("a.b.c");
    let (key, ancestors) = path.split_last().unwrap();
    assert_eq!(key, "c");
    assert_eq!(ancestors, ["a", "b"]);
    assert_eq!(Path::parse("..").split_last(), None);
}

#[test]
fn test_equivalent_paths_address_same_leaf() {
    let mut tree = PathTree::new();
    tree.set("server..http.port.", 8080);

    assert_leaf(&tree, "server.http.port", json!(8080));
    assert_leaf(&tree, ".server.http..port", json!(8080));
    assert!(tree.err().is_ok());
}

#[test]
fn test_owned_path_strings() {
    let mut tree = PathTree::new();
    let user = String::from("alice");
    tree.set(format!("users.{user}.name"), "Alice");

    assert_leaf(&tree, "users.alice.name", json!("Alice"));
    assert!(tree.get_node(format!("users.{user}")).is_some());
}
