//! Node and value types for path trees.
//!
//! A [`Node`] is one level of the tree: a mapping from string keys to
//! [`Value`]s. Each value is either a terminal payload ([`Value::Leaf`]) or a
//! nested node ([`Value::Node`]). Nodes serialize as plain nested maps, so an
//! assembled tree can be handed directly to any serde format.

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

/// Values that can be stored in a [`Node`].
///
/// ```
/// # use pathtree::tree::{Node, Value};
/// let leaf: Value<i64> = Value::Leaf(42);
/// assert!(leaf.is_leaf());
/// assert_eq!(leaf.as_leaf(), Some(&42));
///
/// let branch: Value<i64> = Value::Node(Node::new());
/// assert!(branch.is_node());
/// assert!(branch.as_leaf().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value<T> {
    /// Sub-tree containing other values
    Node(Node<T>),
    /// Terminal payload
    Leaf(T),
}

impl<T> Value<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Value::Leaf(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, Value::Node(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Value::Leaf(value) => Some(value),
            Value::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&Node<T>> {
        match self {
            Value::Node(node) => Some(node),
            Value::Leaf(_) => None,
        }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut Node<T>> {
        match self {
            Value::Node(node) => Some(node),
            Value::Leaf(_) => None,
        }
    }

    pub fn into_leaf(self) -> Option<T> {
        match self {
            Value::Leaf(value) => Some(value),
            Value::Node(_) => None,
        }
    }

    /// Borrows this value as a [`ValueRef`].
    pub fn as_value_ref(&self) -> ValueRef<'_, T> {
        match self {
            Value::Node(node) => ValueRef::Node(node),
            Value::Leaf(value) => ValueRef::Leaf(value),
        }
    }
}

impl<T> From<Node<T>> for Value<T> {
    fn from(node: Node<T>) -> Self {
        Value::Node(node)
    }
}

impl<T: fmt::Display> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Node(node) => write!(f, "{node}"),
            Value::Leaf(value) => write!(f, "{value}"),
        }
    }
}

/// A borrowed view of whatever a path resolved to.
///
/// Lookups return this rather than `&Value<T>` because the root of a tree is
/// a bare [`Node`] that is not wrapped in a `Value`.
#[derive(Debug, PartialEq, Eq)]
pub enum ValueRef<'a, T> {
    Node(&'a Node<T>),
    Leaf(&'a T),
}

impl<'a, T> ValueRef<'a, T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, ValueRef::Leaf(_))
    }

    pub fn is_node(&self) -> bool {
        matches!(self, ValueRef::Node(_))
    }

    pub fn as_leaf(&self) -> Option<&'a T> {
        match *self {
            ValueRef::Leaf(value) => Some(value),
            ValueRef::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&'a Node<T>> {
        match *self {
            ValueRef::Node(node) => Some(node),
            ValueRef::Leaf(_) => None,
        }
    }
}

impl<'a, T: Clone> ValueRef<'a, T> {
    /// Clones the referenced data into an owned [`Value`].
    pub fn to_owned_value(&self) -> Value<T> {
        match *self {
            ValueRef::Node(node) => Value::Node(node.clone()),
            ValueRef::Leaf(value) => Value::Leaf(value.clone()),
        }
    }
}

// Manual impls: deriving would require `T: Clone`/`T: Copy`.
impl<T> Clone for ValueRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValueRef<'_, T> {}

/// One level of a path tree: a mapping from string keys to values.
///
/// Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node<T> {
    /// Child values indexed by key
    children: HashMap<String, Value<T>>,
}

impl<T> Node<T> {
    /// Creates a new empty node
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of direct keys
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this node has a direct child with the given key.
    ///
    /// Keys are single segments; dots are not interpreted.
    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a direct child by key.
    pub fn get(&self, key: &str) -> Option<&Value<T>> {
        self.children.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value<T>> {
        self.children.get_mut(key)
    }

    /// Inserts a direct child, returning the previous value if present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value<T>>,
    ) -> Option<Value<T>> {
        self.children.insert(key.into(), value.into())
    }

    /// Removes a direct child, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Value<T>> {
        self.children.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value<T>)> {
        self.children.iter()
    }

    /// Returns the child stored under `key`, inserting an empty node first
    /// if the key is vacant.
    pub(crate) fn entry_or_node(&mut self, key: &str) -> &mut Value<T> {
        self.children
            .entry(key.to_string())
            .or_insert_with(|| Value::Node(Node::new()))
    }

    /// Builder method to insert a leaf and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<T>) -> Self {
        self.children.insert(key.into(), Value::Leaf(value.into()));
        self
    }

    /// Builder method to insert a nested node and return self
    pub fn with_node(mut self, key: impl Into<String>, node: Node<T>) -> Self {
        self.children.insert(key.into(), Value::Node(node));
        self
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sorted so the output is stable across runs.
        let mut entries: Vec<_> = self.children.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in entries {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<T> FromIterator<(String, Value<T>)> for Node<T> {
    fn from_iter<I: IntoIterator<Item = (String, Value<T>)>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Node<T> {
    type Item = (&'a String, &'a Value<T>);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Value<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
