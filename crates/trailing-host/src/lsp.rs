//! LSP-shaped JSON for positions, edits and selections.
//!
//! Hosts that speak the language server protocol (or something close to it) exchange
//! `{ line, character }` positions with UTF-16 columns, which is what the engine uses already.
//! Only the small subset needed to ship a [`ToggleOutcome`] is covered; no `lsp-types` dependency.

use serde_json::{Value, json};
use trailing_core::{EditBatch, Position, Range, Selection, TextEdit, ToggleOutcome};

/// `{ "line": .., "character": .. }`
pub fn position_to_value(pos: Position) -> Value {
    json!({ "line": pos.line, "character": pos.character })
}

/// Parse a `Position`-shaped value.
pub fn position_from_value(value: &Value) -> Option<Position> {
    Some(Position::new(
        value.get("line")?.as_u64()? as usize,
        value.get("character")?.as_u64()? as usize,
    ))
}

/// `{ "start": .., "end": .. }`
pub fn range_to_value(range: Range) -> Value {
    json!({
        "start": position_to_value(range.start),
        "end": position_to_value(range.end),
    })
}

/// Parse a `Range`-shaped value.
pub fn range_from_value(value: &Value) -> Option<Range> {
    Some(Range::new(
        position_from_value(value.get("start")?)?,
        position_from_value(value.get("end")?)?,
    ))
}

/// `{ "range": .., "newText": .. }`
pub fn text_edit_to_value(edit: &TextEdit) -> Value {
    json!({
        "range": range_to_value(edit.range),
        "newText": edit.new_text,
    })
}

/// Parse a `TextEdit`-shaped value. A missing `newText` is treated as a deletion.
pub fn text_edit_from_value(value: &Value) -> Option<TextEdit> {
    let range = range_from_value(value.get("range")?)?;
    let new_text = value
        .get("newText")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    Some(TextEdit { range, new_text })
}

/// JSON array of `TextEdit`s.
pub fn text_edits_to_value(batch: &EditBatch) -> Value {
    Value::Array(batch.iter().map(text_edit_to_value).collect())
}

/// Parse a JSON array of `TextEdit`s, skipping malformed entries.
pub fn text_edits_from_value(value: &Value) -> EditBatch {
    value
        .as_array()
        .map(|arr| arr.iter().filter_map(text_edit_from_value).collect())
        .unwrap_or_default()
}

/// `{ "anchor": .., "active": .. }`
pub fn selection_to_value(selection: &Selection) -> Value {
    json!({
        "anchor": position_to_value(selection.anchor),
        "active": position_to_value(selection.active),
    })
}

/// Parse a selection. Accepts `{ anchor, active }` and, for plain ranges, `{ start, end }`.
pub fn selection_from_value(value: &Value) -> Option<Selection> {
    if let (Some(anchor), Some(active)) = (value.get("anchor"), value.get("active")) {
        return Some(Selection::new(
            position_from_value(anchor)?,
            position_from_value(active)?,
        ));
    }
    let range = range_from_value(value)?;
    Some(Selection::new(range.start, range.end))
}

/// Parse a JSON array of selections, skipping malformed entries.
pub fn selections_from_value(value: &Value) -> Vec<Selection> {
    value
        .as_array()
        .map(|arr| arr.iter().filter_map(selection_from_value).collect())
        .unwrap_or_default()
}

/// `{ "edits": [..], "selections": [..] }`
pub fn outcome_to_value(outcome: &ToggleOutcome) -> Value {
    json!({
        "edits": text_edits_to_value(&outcome.edits),
        "selections": outcome
            .selections
            .iter()
            .map(selection_to_value)
            .collect::<Vec<_>>(),
    })
}
