//! Edit batches.
//!
//! Every range in an [`EditBatch`] is expressed in the coordinates of the document **before**
//! any edit of the batch is applied. Hosts apply the whole batch as one transaction; edits that
//! start at the same position land in batch order.

use crate::position::{Position, Range, Selection};

/// A single replacement of `range` by `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Replaced range (pre-edit coordinates).
    pub range: Range,
    /// Inserted text (may be empty; may contain `'\n'`).
    pub new_text: String,
}

impl TextEdit {
    /// Insert `text` at `pos`.
    pub fn insert(pos: Position, text: impl Into<String>) -> Self {
        Self {
            range: Range::empty(pos),
            new_text: text.into(),
        }
    }

    /// Delete `range`.
    pub fn delete(range: Range) -> Self {
        Self {
            range,
            new_text: String::new(),
        }
    }

    /// Returns `true` if this edit only removes text.
    pub fn is_delete(&self) -> bool {
        self.new_text.is_empty() && !self.range.is_empty()
    }
}

/// Ordered set of edits applied atomically by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    /// Append an edit.
    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if the batch holds no edits.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Iterate over edits in batch order.
    pub fn iter(&self) -> std::slice::Iter<'_, TextEdit> {
        self.edits.iter()
    }

    /// Edits as a slice.
    pub fn as_slice(&self) -> &[TextEdit] {
        &self.edits
    }
}

impl IntoIterator for EditBatch {
    type Item = TextEdit;
    type IntoIter = std::vec::IntoIter<TextEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditBatch {
    type Item = &'a TextEdit;
    type IntoIter = std::slice::Iter<'a, TextEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.iter()
    }
}

impl FromIterator<TextEdit> for EditBatch {
    fn from_iter<I: IntoIterator<Item = TextEdit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}

/// Result of one toggle invocation: the edits to apply and the selections to install afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Edits over the pre-edit document.
    pub edits: EditBatch,
    /// Selections valid in the post-edit document, in input order.
    pub selections: Vec<Selection>,
}
