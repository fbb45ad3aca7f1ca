//! Incrementally built trees addressed by dot-delimited paths.
//!
//! [`PathTree`] is the main entry point. Callers populate it path by path,
//! then hand the assembled [`Node`] to whatever serializer they need.
//!
//! # Usage
//!
//! ```
//! use pathtree::PathTree;
//! use serde_json::json;
//!
//! let mut tree = PathTree::new();
//! tree.set("server.http.port", 8080)
//!     .set("server.http.host", "localhost")
//!     .set("log.level", "debug");
//!
//! assert_eq!(tree.get_leaf("server.http.port"), Some(&json!(8080)));
//! assert!(tree.err().is_ok());
//!
//! assert_eq!(
//!     tree.to_json()?,
//!     json!({
//!         "server": { "http": { "port": 8080, "host": "localhost" } },
//!         "log": { "level": "debug" },
//!     })
//! );
//! # Ok::<(), pathtree::Error>(())
//! ```
//!
//! # Conflicts
//!
//! Writing below a key that currently holds a leaf replaces the leaf with an
//! empty node and records a [`TreeError::StructuralConflict`]. Reads that run
//! into a leaf where a node was needed record the same conflict and return
//! `None`. Nothing fails at the call site; check [`PathTree::err`] once the
//! tree is built.
//!
//! ```
//! use pathtree::PathTree;
//!
//! let mut tree = PathTree::new();
//! tree.set("key", "xyz").set("key.child", "xyz");
//!
//! assert_eq!(tree.get_leaf("key.child").and_then(|v| v.as_str()), Some("xyz"));
//! assert_eq!(tree.err().unwrap_err().to_string(), "'key' is not a node");
//! ```

use std::cell::RefCell;

use serde::Serialize;

pub mod errors;
pub mod node;
pub mod path;

pub use errors::TreeError;
pub use node::{Node, Value, ValueRef};
pub use path::Path;

/// A tree of string-keyed nodes built and queried through dot-delimited
/// paths.
///
/// The root node is created lazily by the first write. Structural conflicts
/// are accumulated across all operations and never cleared.
///
/// `PathTree` is not `Sync`: the conflict log uses interior mutability so
/// that reads can record conflicts through `&self`. Callers sharing a tree
/// across threads must wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct PathTree<T = serde_json::Value> {
    root: Option<Node<T>>,
    conflicts: RefCell<Vec<TreeError>>,
}

impl PathTree {
    /// Creates an empty tree holding JSON leaves.
    ///
    /// Use [`PathTree::default`] for other leaf types.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for PathTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            conflicts: RefCell::new(Vec::new()),
        }
    }
}

impl<T> From<Node<T>> for PathTree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(root),
            conflicts: RefCell::new(Vec::new()),
        }
    }
}

impl<T> PathTree<T> {
    /// Writes a leaf at `path`, creating missing intermediate nodes.
    ///
    /// A leaf found where an intermediate node is needed is replaced by an
    /// empty node and recorded as a conflict. An empty path is ignored.
    pub fn set(&mut self, path: impl AsRef<str>, value: impl Into<T>) -> &mut Self {
        self.set_value(path, Value::Leaf(value.into()))
    }

    /// Writes a prepared value at `path`.
    ///
    /// This is how a whole sub-tree is attached in one step.
    pub fn set_value(
        &mut self,
        path: impl AsRef<str>,
        value: impl Into<Value<T>>,
    ) -> &mut Self {
        let path = Path::parse(path.as_ref());
        let Some((key, ancestors)) = path.split_last() else {
            tracing::warn!("Ignoring set with an empty path");
            return self;
        };

        let root = self.root.get_or_insert_with(|| {
            tracing::trace!("Creating root node");
            Node::new()
        });
        if let Some(parent) = walk_mut(root, ancestors, true, &self.conflicts) {
            parent.insert(key, value);
        }
        self
    }

    /// Builder method to set a leaf and return self
    pub fn with(mut self, path: impl AsRef<str>, value: impl Into<T>) -> Self {
        self.set(path, value);
        self
    }

    /// Removes the value at `path` together with everything below it.
    ///
    /// Missing ancestors make this a no-op. A leaf found where an ancestor
    /// node is needed is recorded as a conflict and left untouched.
    pub fn remove(&mut self, path: impl AsRef<str>) -> &mut Self {
        let path = Path::parse(path.as_ref());
        let Some((key, ancestors)) = path.split_last() else {
            tracing::warn!("Ignoring remove with an empty path");
            return self;
        };

        if let Some(root) = self.root.as_mut()
            && let Some(parent) = walk_mut(root, ancestors, false, &self.conflicts)
        {
            parent.remove(key);
        }
        self
    }

    /// Returns what is stored at `path`.
    ///
    /// An empty path returns the root node, or `None` when the root is unset
    /// or empty. Otherwise `None` means the path does not exist; a leaf found
    /// where an ancestor node is needed also yields `None` and is recorded as
    /// a conflict.
    pub fn get(&self, path: impl AsRef<str>) -> Option<ValueRef<'_, T>> {
        let path = Path::parse(path.as_ref());
        let Some((key, ancestors)) = path.split_last() else {
            return self
                .root
                .as_ref()
                .filter(|root| !root.is_empty())
                .map(ValueRef::Node);
        };

        let parent = walk(self.root.as_ref()?, ancestors, &self.conflicts)?;
        parent.get(key).map(Value::as_value_ref)
    }

    /// Returns the leaf at `path`, or `None` if it is missing or a node.
    pub fn get_leaf(&self, path: impl AsRef<str>) -> Option<&T> {
        self.get(path)?.as_leaf()
    }

    /// Returns the node at `path`, or `None` if it is missing or a leaf.
    pub fn get_node(&self, path: impl AsRef<str>) -> Option<&Node<T>> {
        self.get(path)?.as_node()
    }

    /// Returns true if anything is stored at `path`.
    pub fn contains(&self, path: impl AsRef<str>) -> bool {
        self.get(path).is_some()
    }

    /// Reports every conflict recorded since the tree was created.
    ///
    /// Returns `Ok(())` when nothing was recorded, the conflict itself when
    /// exactly one was recorded, and a combined [`TreeError::Conflicts`]
    /// otherwise. The recorded list is left untouched.
    pub fn err(&self) -> crate::Result<()> {
        match TreeError::combine(self.conflicts()) {
            None => Ok(()),
            Some(err) => Err(err.into()),
        }
    }

    /// Snapshot of the recorded conflicts in occurrence order.
    pub fn conflicts(&self) -> Vec<TreeError> {
        self.conflicts.borrow().clone()
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.borrow().is_empty()
    }

    /// Returns the root node, or `None` before the first write.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }

    /// Consumes the tree, returning its root node.
    pub fn into_root(self) -> Option<Node<T>> {
        self.root
    }
}

impl<T: Serialize> PathTree<T> {
    /// Serializes the tree into a JSON value.
    ///
    /// A tree without a root serializes as an empty object.
    pub fn to_json(&self) -> crate::Result<serde_json::Value> {
        match &self.root {
            Some(root) => Ok(serde_json::to_value(root)?),
            None => Ok(serde_json::Value::Object(serde_json::Map::new())),
        }
    }
}

impl<K, V, T> Extend<(K, V)> for PathTree<T>
where
    K: AsRef<str>,
    V: Into<T>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (path, value) in iter {
            self.set(path, value);
        }
    }
}

impl<K, V, T> FromIterator<(K, V)> for PathTree<T>
where
    K: AsRef<str>,
    V: Into<T>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

/// Records a structural conflict at `segments` in the conflict log.
fn record_conflict(conflicts: &RefCell<Vec<TreeError>>, segments: &[&str]) {
    let path = path::join(segments);
    tracing::debug!(path = %path, "Expected a node but found a leaf");
    conflicts
        .borrow_mut()
        .push(TreeError::StructuralConflict { path });
}

/// Walks `segments` down from `node`, returning the node they name.
///
/// With `create` set, vacant keys get a fresh empty node and leaves in the
/// way are replaced by one, so the walk always reaches a node. Without it,
/// a vacant key ends the walk with `None`. Either way, a leaf in the way is
/// recorded as a conflict.
fn walk_mut<'a, T>(
    mut node: &'a mut Node<T>,
    segments: &[&str],
    create: bool,
    conflicts: &RefCell<Vec<TreeError>>,
) -> Option<&'a mut Node<T>> {
    for (depth, segment) in segments.iter().enumerate() {
        let slot = if create {
            node.entry_or_node(segment)
        } else {
            node.get_mut(segment)?
        };

        if slot.is_leaf() {
            record_conflict(conflicts, &segments[..=depth]);
            if !create {
                return None;
            }
            *slot = Value::Node(Node::new());
        }
        node = slot.as_node_mut()?;
    }
    Some(node)
}

/// Read-only counterpart of [`walk_mut`] without `create`.
fn walk<'a, T>(
    mut node: &'a Node<T>,
    segments: &[&str],
    conflicts: &RefCell<Vec<TreeError>>,
) -> Option<&'a Node<T>> {
    for (depth, segment) in segments.iter().enumerate() {
        match node.get(segment)? {
            Value::Node(child) => node = child,
            Value::Leaf(_) => {
                record_conflict(conflicts, &segments[..=depth]);
                return None;
            }
        }
    }
    Some(node)
}
