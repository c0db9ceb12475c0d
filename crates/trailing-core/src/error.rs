use crate::position::{Position, Range};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors reported by the toggle engine for malformed input.
pub enum ToggleError {
    #[error("no selections to toggle")]
    /// The caller passed an empty selection list.
    NoSelections,

    #[error("line {line} is out of range (document has {line_count} lines)")]
    /// A selection's active line does not exist in the document.
    LineOutOfRange {
        /// The requested line.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    #[error("marker cannot be empty")]
    /// The marker string was empty.
    EmptyMarker,

    #[error("marker {0:?} ends with whitespace")]
    /// The marker ends with whitespace, which line classification trims away.
    TrailingWhitespaceMarker(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when applying an edit batch to a [`crate::Document`].
pub enum DocumentError {
    #[error("invalid position: {0}")]
    /// A position points past the end of its line or past the last line.
    InvalidPosition(Position),

    #[error("overlapping edits: {first} and {second}")]
    /// Two edits in the same batch cover overlapping ranges.
    OverlappingEdits {
        /// The earlier range (in document order).
        first: Range,
        /// The range overlapping it.
        second: Range,
    },
}
