#![warn(missing_docs)]
//! `trailing-host` - editor-host glue for `trailing-core`.
//!
//! - [`symbols`] - the command table (`trailing.toggleComma`, `trailing.toggleCommaWithNewLine`)
//! - [`registry`] - registers the commands and runs them against the active editor
//! - [`editor`] - the [`Editor`] / [`Workspace`] seams plus in-memory implementations
//! - [`lsp`] - LSP-shaped JSON for edits and selections
//!
//! ```rust
//! use trailing_core::{Position, Selection};
//! use trailing_host::{CommandRegistry, MemoryEditor, MemoryWorkspace};
//!
//! let mut workspace = MemoryWorkspace::new();
//! let index = workspace.open(
//!     MemoryEditor::new("foo").with_selections(vec![Selection::caret(Position::new(0, 0))]),
//! );
//!
//! let registry = CommandRegistry::activate();
//! registry.execute("trailing.toggleComma", &mut workspace).unwrap();
//!
//! assert_eq!(workspace.editor(index).unwrap().text(), "foo,");
//! ```

pub mod editor;
mod error;
pub mod lsp;
pub mod registry;
pub mod symbols;

pub use editor::{Editor, MemoryEditor, MemoryWorkspace, Workspace};
pub use error::HostError;
pub use registry::{CommandRegistry, run_toggle};
pub use symbols::{TrailingCommand, TrailingSymbol, trailing_definitions};
