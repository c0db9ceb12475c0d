//! The toggle engine.
//!
//! # Algorithm
//!
//! Selections are folded in input order, which hosts report in document order. Each *line* is
//! handled at most once: the first selection whose active position sits on a line decides the
//! edit for that line, later selections on the same line are either dropped (jump mode) or
//! passed through with the same line shift (keep mode).
//!
//! For every handled line the engine picks a [`ToggleCase`]:
//!
//! | marker present | jump | new line | case                             |
//! |----------------|------|----------|----------------------------------|
//! | yes            | yes  | any      | [`ToggleCase::RemoveAndJump`]    |
//! | yes            | no   | any      | [`ToggleCase::RemoveAndKeep`]    |
//! | no             | yes  | no       | [`ToggleCase::AppendAndJump`]    |
//! | no             | no   | no       | [`ToggleCase::AppendAndKeep`]    |
//! | no             | yes  | yes      | [`ToggleCase::AppendLineAndJump`]|
//! | no             | no   | yes      | [`ToggleCase::AppendLineAndKeep`]|
//!
//! All edits are computed against the pre-edit document. Resulting selections live in the
//! post-edit document, so every selection is shifted down by the number of lines inserted for
//! earlier lines of the same batch (the *line offset*).

use crate::edit::{TextEdit, ToggleOutcome};
use crate::error::ToggleError;
use crate::line_view::LineView;
use crate::lines::LineAccessor;
use crate::marker::Marker;
use crate::position::{Position, Range, Selection};
use crate::utf16;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Behavior switches for one toggle invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToggleOptions {
    /// Open a new line (carrying the indentation) after an inserted marker.
    pub add_new_line: bool,
    /// Move the selections to the edit sites instead of preserving them.
    pub jump_to_symbol: bool,
}

impl ToggleOptions {
    /// Create options.
    pub fn new(add_new_line: bool, jump_to_symbol: bool) -> Self {
        Self {
            add_new_line,
            jump_to_symbol,
        }
    }
}

/// What to do with one line, resolved from the line state and the options.
///
/// Removing a marker never inserts a line, so `add_new_line` does not split the removal cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleCase {
    /// Delete the marker, put a cursor where it was.
    RemoveAndJump,
    /// Delete the marker, keep the selection (end-of-line carets follow the new line end).
    RemoveAndKeep,
    /// Insert the marker, put a cursor right after it.
    AppendAndJump,
    /// Insert the marker, keep the selection (ranges ending at end-of-line grow with it).
    AppendAndKeep,
    /// Insert the marker and a new line, put a cursor on the new line.
    AppendLineAndJump,
    /// Insert the marker and a new line, keep the selection.
    AppendLineAndKeep,
}

impl ToggleCase {
    /// Pick the case for a line.
    pub fn resolve(has_marker: bool, options: ToggleOptions) -> Self {
        match (has_marker, options.jump_to_symbol, options.add_new_line) {
            (true, true, _) => Self::RemoveAndJump,
            (true, false, _) => Self::RemoveAndKeep,
            (false, true, false) => Self::AppendAndJump,
            (false, false, false) => Self::AppendAndKeep,
            (false, true, true) => Self::AppendLineAndJump,
            (false, false, true) => Self::AppendLineAndKeep,
        }
    }

    /// Returns `true` if this case removes the marker.
    pub fn removes(self) -> bool {
        matches!(self, Self::RemoveAndJump | Self::RemoveAndKeep)
    }

    /// Returns `true` if this case inserts a line after the marker.
    pub fn inserts_line(self) -> bool {
        matches!(self, Self::AppendLineAndJump | Self::AppendLineAndKeep)
    }
}

/// Edits and resulting selection for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToggle {
    /// The case that produced this result.
    pub case: ToggleCase,
    /// One or two edits for the line.
    pub edits: Vec<TextEdit>,
    /// Resulting selection (post-edit coordinates).
    pub selection: Selection,
}

/// Toggles a marker at the end of every line touched by a set of selections.
#[derive(Debug, Clone)]
pub struct ToggleEngine {
    marker: Marker,
    options: ToggleOptions,
}

impl ToggleEngine {
    /// Create an engine for `marker`.
    pub fn new(marker: Marker, options: ToggleOptions) -> Self {
        Self { marker, options }
    }

    /// The marker being toggled.
    pub fn marker(&self) -> &Marker {
        &self.marker
    }

    /// Compute the edits and new selections for `selections` over `lines`.
    pub fn toggle<L>(
        &self,
        lines: &L,
        selections: &[Selection],
    ) -> Result<ToggleOutcome, ToggleError>
    where
        L: LineAccessor + ?Sized,
    {
        if selections.is_empty() {
            return Err(ToggleError::NoSelections);
        }

        let fold = selections
            .iter()
            .try_fold(Fold::default(), |fold, selection| {
                fold.step(self, lines, selection)
            })?;

        debug!(
            edits = fold.outcome.edits.len(),
            selections = fold.outcome.selections.len(),
            inserted_lines = fold.line_offset,
            "toggle computed"
        );
        Ok(fold.outcome)
    }

    /// Toggle a single, already classified line.
    ///
    /// `line_offset` is the number of lines inserted before `line` earlier in the batch.
    pub fn toggle_line(
        &self,
        line: usize,
        view: &LineView<'_>,
        selection: &Selection,
        line_offset: usize,
    ) -> LineToggle {
        let case = ToggleCase::resolve(view.has_marker(), self.options);
        let marker_len = self.marker.len_utf16();
        let trimmed_end = Position::new(line, view.trimmed_end());

        if case.removes() {
            let removed = Range::new(trimmed_end.translate_left(marker_len), trimmed_end);
            let selection = match case {
                ToggleCase::RemoveAndJump => {
                    Selection::caret(removed.start.translate_lines(line_offset))
                }
                _ => keep_after_removal(line, view, selection, marker_len)
                    .translate_lines(line_offset),
            };
            return LineToggle {
                case,
                edits: vec![TextEdit::delete(removed)],
                selection,
            };
        }

        let mut edits = vec![TextEdit::insert(trimmed_end, self.marker.as_str())];
        let lead = if case.inserts_line() {
            let lead = view.leading_whitespace();
            edits.push(TextEdit::insert(
                Position::new(line, view.len()),
                format!("\n{lead}"),
            ));
            lead
        } else {
            ""
        };

        let selection = match case {
            ToggleCase::AppendAndJump => Selection::caret(trimmed_end.translate_right(marker_len)),
            ToggleCase::AppendLineAndJump => Selection::caret(Position::new(
                line + line_offset + 1,
                utf16::len(lead),
            )),
            ToggleCase::AppendLineAndKeep => selection.translate_lines(line_offset),
            _ => keep_after_insertion(line, view, selection, marker_len),
        };

        LineToggle {
            case,
            edits,
            selection,
        }
    }
}

/// Compute the outcome of toggling `marker` for `selections` over `lines`.
///
/// See [`ToggleEngine::toggle`].
pub fn toggle<L>(
    lines: &L,
    selections: &[Selection],
    marker: &Marker,
    options: ToggleOptions,
) -> Result<ToggleOutcome, ToggleError>
where
    L: LineAccessor + ?Sized,
{
    ToggleEngine::new(marker.clone(), options).toggle(lines, selections)
}

#[derive(Debug, Default)]
struct Fold {
    /// Handled lines and the line offset their first selection received.
    handled: BTreeMap<usize, usize>,
    /// Lines inserted so far.
    line_offset: usize,
    outcome: ToggleOutcome,
}

impl Fold {
    /// Fold one selection into the outcome.
    ///
    /// A selection on an already handled line adds no edits. In keep mode it is re-emitted
    /// shifted by the line offset its line received, not passed through unchanged: lines opened
    /// above it earlier in the batch move it down just like the first selection on that line.
    fn step<L>(
        mut self,
        engine: &ToggleEngine,
        lines: &L,
        selection: &Selection,
    ) -> Result<Self, ToggleError>
    where
        L: LineAccessor + ?Sized,
    {
        let line = selection.active.line;

        if let Some(&offset) = self.handled.get(&line) {
            if engine.options.jump_to_symbol {
                trace!(line, "selection collapses onto an already toggled line");
            } else {
                self.outcome
                    .selections
                    .push(selection.translate_lines(offset));
            }
            return Ok(self);
        }

        let text = lines.line(line).ok_or(ToggleError::LineOutOfRange {
            line,
            line_count: lines.line_count(),
        })?;
        let view = LineView::classify(&text, &engine.marker);

        self.handled.insert(line, self.line_offset);

        let result = engine.toggle_line(line, &view, selection, self.line_offset);
        debug!(line, case = ?result.case, line_offset = self.line_offset, "toggled line");

        if result.case.inserts_line() {
            self.line_offset += 1;
        }
        for edit in result.edits {
            self.outcome.edits.push(edit);
        }
        self.outcome.selections.push(result.selection);
        Ok(self)
    }
}

fn ends_at_line_end(line: usize, view: &LineView<'_>, pos: Position) -> bool {
    pos.line == line && pos.character == view.len()
}

/// Selection after the marker was removed, mimicking how hosts drag end-of-line carets along.
fn keep_after_removal(
    line: usize,
    view: &LineView<'_>,
    selection: &Selection,
    marker_len: usize,
) -> Selection {
    if view.trimmed_delta() != 0 || !ends_at_line_end(line, view, selection.end()) {
        return *selection;
    }
    if selection.is_empty() {
        Selection::caret(selection.active.translate_left(marker_len))
    } else {
        selection.with_end(selection.end().translate_left(marker_len))
    }
}

/// Selection after the marker was appended (no new line).
///
/// A range ending at end-of-line grows to include the marker. Carets and ranges on lines with
/// trailing whitespace stay where they are.
fn keep_after_insertion(
    line: usize,
    view: &LineView<'_>,
    selection: &Selection,
    marker_len: usize,
) -> Selection {
    if selection.is_empty()
        || view.trimmed_delta() != 0
        || !ends_at_line_end(line, view, selection.end())
    {
        return *selection;
    }
    selection.with_end(selection.end().translate_right(marker_len))
}
