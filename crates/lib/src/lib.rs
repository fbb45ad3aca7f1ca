//!
//! pathtree: build nested key-value trees by dot-delimited path.
//!
//! Instead of walking nested maps by hand, callers write values at paths such
//! as `"server.http.port"` and let the tree create the intermediate levels.
//! The assembled tree is then serialized by whatever tooling the caller
//! prefers.
//!
//! ## Core Concepts
//!
//! * **Trees (`tree::PathTree`)**: The builder. Owns a lazily created root node and a log of
//!   structural conflicts found along the way.
//! * **Nodes (`tree::Node`)**: One level of the tree, mapping keys to values.
//! * **Values (`tree::Value`)**: Either a terminal leaf payload or a nested node.
//! * **Paths (`tree::Path`)**: Dot-delimited segment chains; empty segments are dropped.
//! * **Conflicts (`tree::TreeError`)**: A leaf found where a node was needed. Collected, never
//!   raised at the call site, and reported by `PathTree::err`.

pub mod constants;
pub mod tree;

/// Re-export the `PathTree` struct for easier access.
pub use tree::PathTree;

/// Result type used throughout the pathtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the pathtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structural conflicts recorded by a tree
    #[error(transparent)]
    Tree(tree::TreeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Tree(_) => "tree",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error reports structural conflicts.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Error::Tree(_))
    }

    /// The recorded conflicts carried by this error, if any.
    pub fn conflicts(&self) -> &[tree::TreeError] {
        match self {
            Error::Tree(tree_err) => tree_err.conflicts(),
            _ => &[],
        }
    }
}
