#![warn(missing_docs)]
//! Trailing Core - multi-cursor toggling of trailing markers
//!
//! # Overview
//!
//! `trailing-core` toggles a trailing marker (typically a comma) at the end of every line touched
//! by a set of cursors/selections. For each line it decides whether to add or remove the
//! marker, computes the exact text edit, optionally opens a new indented line after an added
//! marker, and remaps every selection so that it stays consistent with the edits queued before
//! it in the same batch.
//!
//! The crate is headless: it never talks to an editor. Callers hand in plain data (lines,
//! selections, a marker and [`ToggleOptions`]) and get back a [`ToggleOutcome`] holding an
//! [`EditBatch`] over the pre-edit document plus the selections to install afterwards.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  ToggleEngine (fold over selections)        │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  ToggleCase decision table                  │  ← Per-line branch
//! ├─────────────────────────────────────────────┤
//! │  LineView (classification)                  │  ← Marker / whitespace
//! ├─────────────────────────────────────────────┤
//! │  LineAccessor / Document (Rope)             │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use trailing_core::{Document, Marker, Position, Selection, ToggleOptions, toggle};
//!
//! let mut doc = Document::new("let a = [\n    1\n    2\n]");
//! let cursors = vec![
//!     Selection::caret(Position::new(1, 0)),
//!     Selection::caret(Position::new(2, 0)),
//! ];
//!
//! let outcome = toggle(&doc, &cursors, &Marker::comma(), ToggleOptions::new(false, true)).unwrap();
//! doc.apply_outcome(outcome).unwrap();
//!
//! assert_eq!(doc.text(), "let a = [\n    1,\n    2,\n]");
//! assert_eq!(doc.selections()[0], Selection::caret(Position::new(1, 6)));
//! ```
//!
//! # Module Description
//!
//! - [`line_view`] - classify a line against a marker
//! - [`toggle`] - the engine and its decision table
//! - [`edit`] - edit batches and toggle outcomes
//! - [`document`] - Rope-backed in-memory document applying batches atomically
//! - [`utf16`] - UTF-16 column conversions
//!
//! # Coordinates
//!
//! Columns are UTF-16 code units, the unit editor hosts and LSP use.
//! Lines break at `"\r\n"`, `'\n'` and `'\r'`, as in LSP.

pub mod document;
pub mod edit;
mod error;
pub mod line_ending;
pub mod line_view;
pub mod lines;
mod marker;
pub mod position;
pub mod toggle;
pub mod utf16;

pub use document::Document;
pub use edit::{EditBatch, TextEdit, ToggleOutcome};
pub use error::{DocumentError, ToggleError};
pub use line_ending::LineEnding;
pub use line_view::{LineView, classify};
pub use lines::{LineAccessor, TextLines};
pub use marker::Marker;
pub use position::{Position, Range, Selection, SelectionDirection};
pub use toggle::{LineToggle, ToggleCase, ToggleEngine, ToggleOptions, toggle};
