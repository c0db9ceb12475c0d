//! Positions, ranges and selections.
//!
//! Columns are counted in **UTF-16 code units**, which is what editor hosts (and LSP) speak.
//! Use [`crate::utf16`] to convert from/to character offsets.

use std::cmp::Ordering;
use std::fmt;

/// Position coordinates (line and UTF-16 column)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in UTF-16 code units within the logical line.
    pub character: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Move the position down by `lines` lines, keeping its column.
    pub fn translate_lines(self, lines: usize) -> Self {
        Self {
            line: self.line + lines,
            ..self
        }
    }

    /// Move the position left by `columns` code units (clamped at column 0).
    pub fn translate_left(self, columns: usize) -> Self {
        Self {
            character: self.character.saturating_sub(columns),
            ..self
        }
    }

    /// Move the position right by `columns` code units.
    pub fn translate_right(self, columns: usize) -> Self {
        Self {
            character: self.character + columns,
            ..self
        }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.character.cmp(&other.character))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Half-open range between two positions (`start <= end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a range; the endpoints are reordered if needed.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// An empty range at `pos`.
    pub fn empty(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Returns `true` if the range covers nothing.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionDirection {
    /// Forward selection (anchor before active)
    Forward,
    /// Backward selection (active before anchor)
    Backward,
}

/// A selection: the fixed `anchor` and the moving `active` end (where the caret is drawn).
///
/// A *cursor* is a selection whose anchor equals its active position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Where the selection started.
    pub anchor: Position,
    /// Where the caret currently is.
    pub active: Position,
}

impl Selection {
    /// Create a selection from anchor to active.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// A collapsed selection (cursor) at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// Returns `true` if this selection is a bare cursor.
    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// The smaller endpoint.
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// The larger endpoint.
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }

    /// Direction of the selection.
    pub fn direction(&self) -> SelectionDirection {
        if self.anchor <= self.active {
            SelectionDirection::Forward
        } else {
            SelectionDirection::Backward
        }
    }

    /// Shift both endpoints down by `lines` lines.
    pub fn translate_lines(self, lines: usize) -> Self {
        if lines == 0 {
            return self;
        }
        Self {
            anchor: self.anchor.translate_lines(lines),
            active: self.active.translate_lines(lines),
        }
    }

    /// Replace the larger endpoint, keeping the direction.
    pub fn with_end(self, end: Position) -> Self {
        match self.direction() {
            SelectionDirection::Forward => Self {
                anchor: self.anchor,
                active: end,
            },
            SelectionDirection::Backward => Self {
                anchor: end,
                active: self.active,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering_is_lexicographic() {
        assert!(Position::new(0, 9) < Position::new(1, 0));
        assert!(Position::new(2, 1) < Position::new(2, 3));
        assert_eq!(Position::new(3, 3).cmp(&Position::new(3, 3)), Ordering::Equal);
    }

    #[test]
    fn test_translate_left_clamps() {
        assert_eq!(Position::new(0, 1).translate_left(3), Position::new(0, 0));
    }

    #[test]
    fn test_with_end_keeps_direction() {
        let forward = Selection::new(Position::new(0, 0), Position::new(0, 5));
        assert_eq!(
            forward.with_end(Position::new(0, 4)),
            Selection::new(Position::new(0, 0), Position::new(0, 4))
        );

        let backward = Selection::new(Position::new(0, 5), Position::new(0, 1));
        assert_eq!(backward.direction(), SelectionDirection::Backward);
        assert_eq!(
            backward.with_end(Position::new(0, 4)),
            Selection::new(Position::new(0, 4), Position::new(0, 1))
        );
    }

    #[test]
    fn test_range_new_reorders() {
        let r = Range::new(Position::new(1, 2), Position::new(0, 7));
        assert_eq!(r.start, Position::new(0, 7));
        assert_eq!(r.end, Position::new(1, 2));
        assert_eq!(r.to_string(), "0:7..1:2");
    }
}
