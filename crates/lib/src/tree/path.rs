//! Dot-delimited paths into a [`PathTree`](super::PathTree).
//!
//! A path such as `"server.http.port"` names a chain of ancestor nodes
//! (`server`, `http`) followed by the key written or read in the last of
//! them (`port`). Empty segments produced by leading, trailing or doubled
//! separators are dropped, so `""` and `"."` both address the root.
//!
//! ```rust
//! use pathtree::tree::Path;
//!
//! let path = Path::parse("server..http.port.");
//! assert_eq!(path.segments(), ["server", "http", "port"]);
//! assert_eq!(path.to_string(), "server.http.port");
//!
//! let (key, ancestors) = path.split_last().unwrap();
//! assert_eq!(key, "port");
//! assert_eq!(ancestors, ["server", "http"]);
//!
//! assert!(Path::parse(".").is_root());
//! ```

use std::fmt;

use crate::constants::PATH_SEPARATOR;

/// A path borrowed from its source string, split into non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<'a> {
    segments: Vec<&'a str>,
}

impl<'a> Path<'a> {
    /// Splits `input` on the separator, dropping empty segments.
    pub fn parse(input: &'a str) -> Self {
        Self {
            segments: input
                .split(PATH_SEPARATOR)
                .filter(|segment| !segment.is_empty())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Returns true if the path has no segments and so names the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the final key from its ancestor chain.
    ///
    /// Returns `None` for the root.
    pub fn split_last(&self) -> Option<(&'a str, &[&'a str])> {
        self.segments
            .split_last()
            .map(|(key, ancestors)| (*key, ancestors))
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", join(&self.segments))
    }
}

/// Joins segments back into a dot-delimited string.
pub(crate) fn join(segments: &[&str]) -> String {
    segments.join(&PATH_SEPARATOR.to_string())
}
