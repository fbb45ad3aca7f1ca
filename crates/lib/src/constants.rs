//! Constants used throughout the pathtree library.
//!
//! Central definitions for the separators that shape paths and error
//! messages.

/// Separator between the segments of a path.
pub const PATH_SEPARATOR: char = '.';

/// Separator between individual messages of a combined conflict error.
pub const CONFLICT_SEPARATOR: &str = ", ";
