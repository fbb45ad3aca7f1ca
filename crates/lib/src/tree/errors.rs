//! Error types for path tree operations.
//!
//! Tree operations never fail outright. Structural conflicts found while
//! walking a path are recorded on the tree and reported together by
//! [`PathTree::err`](super::PathTree::err).

use thiserror::Error;

use crate::constants::CONFLICT_SEPARATOR;

/// Structured error types for path tree operations.
#[non_exhaustive]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TreeError {
    /// A position that had to hold a node held a leaf instead.
    ///
    /// `path` is the ancestor chain up to and including the offending key.
    /// Earlier map builders cited only the ancestors above it, which left a
    /// conflict at the top level with an empty path.
    #[error("'{path}' is not a node")]
    StructuralConflict { path: String },

    /// Several conflicts, kept in the order they were recorded.
    #[error("{}", join_messages(.conflicts))]
    Conflicts { conflicts: Vec<TreeError> },
}

fn join_messages(conflicts: &[TreeError]) -> String {
    conflicts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(CONFLICT_SEPARATOR)
}

impl TreeError {
    /// Combines recorded conflicts into a single error.
    ///
    /// Returns `None` for an empty list and the conflict itself for a list of
    /// one.
    pub fn combine(mut conflicts: Vec<TreeError>) -> Option<TreeError> {
        match conflicts.len() {
            0 => None,
            1 => conflicts.pop(),
            _ => Some(TreeError::Conflicts { conflicts }),
        }
    }

    /// Check if this error is a single structural conflict
    pub fn is_structural_conflict(&self) -> bool {
        matches!(self, TreeError::StructuralConflict { .. })
    }

    /// Get the path if this is a single structural conflict
    pub fn path(&self) -> Option<&str> {
        match self {
            TreeError::StructuralConflict { path } => Some(path),
            TreeError::Conflicts { .. } => None,
        }
    }

    /// Individual conflicts in occurrence order.
    pub fn conflicts(&self) -> &[TreeError] {
        match self {
            TreeError::StructuralConflict { .. } => std::slice::from_ref(self),
            TreeError::Conflicts { conflicts } => conflicts,
        }
    }
}

// Conversion from TreeError to the main Error type
impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}
