//! In-memory document.
//!
//! A small Rope-backed host for the engine: it exposes its lines through [`LineAccessor`],
//! applies an [`EditBatch`] as a single all-or-nothing transaction, and stores the selections
//! installed after an edit.

use crate::edit::{EditBatch, ToggleOutcome};
use crate::error::DocumentError;
use crate::line_ending::LineEnding;
use crate::lines::LineAccessor;
use crate::position::{Position, Selection};
use crate::utf16;
use ropey::Rope;
use std::borrow::Cow;
use tracing::warn;

/// Text document with a selection set.
#[derive(Debug, Clone)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
    selections: Vec<Selection>,
    version: u64,
}

impl Document {
    /// Create a document; CRLF and CR input is normalized and remembered.
    ///
    /// The selection set starts as a single cursor at `0:0`.
    pub fn new(text: &str) -> Self {
        let line_ending = LineEnding::detect_in_text(text);
        let rope = Rope::from_str(&line_ending.normalize(text));
        Self {
            rope,
            line_ending,
            selections: vec![Selection::caret(Position::default())],
            version: 0,
        }
    }

    /// Document text with LF newlines.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Document text using the line ending it was loaded with.
    pub fn text_with_line_ending(&self) -> String {
        self.line_ending.apply_to_text(&self.text())
    }

    /// The line ending the document was loaded with.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Number of lines (`N` newlines => `N + 1` lines).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of a line without its newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        // In mixed documents a stray `\r` ends a line on its own.
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Incremented every time a non-empty batch is applied.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Current selections.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Replace the selection set.
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    /// Convert a position to a character offset, validating it.
    pub fn position_to_char_offset(&self, pos: Position) -> Result<usize, DocumentError> {
        let line_text = self
            .line_text(pos.line)
            .ok_or(DocumentError::InvalidPosition(pos))?;
        if pos.character > utf16::len(&line_text) {
            return Err(DocumentError::InvalidPosition(pos));
        }
        let column = utf16::utf16_to_char_offset(&line_text, pos.character);
        Ok(self.rope.line_to_char(pos.line) + column)
    }

    /// Apply every edit of `batch`, or none of them.
    ///
    /// Ranges are resolved against the current text before anything is modified. Edits starting
    /// at the same position are inserted in batch order.
    pub fn apply(&mut self, batch: &EditBatch) -> Result<(), DocumentError> {
        if batch.is_empty() {
            return Ok(());
        }

        let mut resolved = Vec::with_capacity(batch.len());
        for (index, edit) in batch.iter().enumerate() {
            let start = self.position_to_char_offset(edit.range.start)?;
            let end = self.position_to_char_offset(edit.range.end)?;
            resolved.push((start, end, index));
        }
        resolved.sort_by_key(|&(start, _, index)| (start, index));

        for pair in resolved.windows(2) {
            let (_, prev_end, prev_index) = pair[0];
            let (next_start, _, next_index) = pair[1];
            if next_start < prev_end {
                let first = batch.as_slice()[prev_index].range;
                let second = batch.as_slice()[next_index].range;
                warn!(%first, %second, "rejecting edit batch with overlapping ranges");
                return Err(DocumentError::OverlappingEdits { first, second });
            }
        }

        // Back to front so earlier offsets stay valid.
        for &(start, end, index) in resolved.iter().rev() {
            if start < end {
                self.rope.remove(start..end);
            }
            let text = &batch.as_slice()[index].new_text;
            if !text.is_empty() {
                self.rope.insert(start, text);
            }
        }

        self.version += 1;
        Ok(())
    }

    /// Apply a toggle outcome: its edits, then its selections.
    pub fn apply_outcome(&mut self, outcome: ToggleOutcome) -> Result<(), DocumentError> {
        self.apply(&outcome.edits)?;
        self.selections = outcome.selections;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("")
    }
}

impl LineAccessor for Document {
    fn line_count(&self) -> usize {
        Document::line_count(self)
    }

    fn line(&self, index: usize) -> Option<Cow<'_, str>> {
        self.line_text(index).map(Cow::Owned)
    }
}
