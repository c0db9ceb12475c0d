//! Editor-host abstractions.
//!
//! A host exposes its active editor through [`Workspace`]; the command glue never looks anything
//! up on its own. [`MemoryEditor`] / [`MemoryWorkspace`] are in-memory implementations backed
//! by [`trailing_core::Document`].

use trailing_config::SettingsStore;
use trailing_core::{Document, DocumentError, EditBatch, LineAccessor, Selection};

/// An open text editor.
pub trait Editor {
    /// Language of the document, used to scope settings.
    fn language_id(&self) -> Option<&str>;

    /// Current selections, in document order.
    fn selections(&self) -> Vec<Selection>;

    /// Line access for the current text.
    fn lines(&self) -> &dyn LineAccessor;

    /// Apply every edit of `batch` as one transaction, or none of them.
    fn apply_edits(&mut self, batch: &EditBatch) -> Result<(), DocumentError>;

    /// Replace the selections.
    fn set_selections(&mut self, selections: Vec<Selection>);
}

/// A set of editors plus settings.
pub trait Workspace {
    /// The focused editor, if any.
    fn active_editor_mut(&mut self) -> Option<&mut dyn Editor>;

    /// Settings store.
    fn settings(&self) -> &SettingsStore;
}

/// In-memory editor.
#[derive(Debug, Clone, Default)]
pub struct MemoryEditor {
    document: Document,
    language_id: Option<String>,
}

impl MemoryEditor {
    /// Open `text` with a single cursor at `0:0`.
    pub fn new(text: &str) -> Self {
        Self {
            document: Document::new(text),
            language_id: None,
        }
    }

    /// Set the language id.
    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    /// Replace the initial selections.
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.document.set_selections(selections);
        self
    }

    /// The underlying document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.document.text()
    }
}

impl Editor for MemoryEditor {
    fn language_id(&self) -> Option<&str> {
        self.language_id.as_deref()
    }

    fn selections(&self) -> Vec<Selection> {
        self.document.selections().to_vec()
    }

    fn lines(&self) -> &dyn LineAccessor {
        &self.document
    }

    fn apply_edits(&mut self, batch: &EditBatch) -> Result<(), DocumentError> {
        self.document.apply(batch)
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.document.set_selections(selections);
    }
}

/// In-memory workspace.
#[derive(Debug, Clone)]
pub struct MemoryWorkspace {
    editors: Vec<MemoryEditor>,
    active: Option<usize>,
    settings: SettingsStore,
}

impl MemoryWorkspace {
    /// Empty workspace using the declared default settings.
    pub fn new() -> Self {
        Self::with_settings(SettingsStore::with_declared_defaults())
    }

    /// Empty workspace with `settings`.
    pub fn with_settings(settings: SettingsStore) -> Self {
        Self {
            editors: Vec::new(),
            active: None,
            settings,
        }
    }

    /// Open an editor and focus it. Returns its index.
    pub fn open(&mut self, editor: MemoryEditor) -> usize {
        self.editors.push(editor);
        let index = self.editors.len() - 1;
        self.active = Some(index);
        index
    }

    /// Close every editor.
    pub fn close_all(&mut self) {
        self.editors.clear();
        self.active = None;
    }

    /// Editor at `index`.
    pub fn editor(&self, index: usize) -> Option<&MemoryEditor> {
        self.editors.get(index)
    }

    /// Mutable settings.
    pub fn settings_mut(&mut self) -> &mut SettingsStore {
        &mut self.settings
    }
}

impl Default for MemoryWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace for MemoryWorkspace {
    fn active_editor_mut(&mut self) -> Option<&mut dyn Editor> {
        let index = self.active?;
        self.editors
            .get_mut(index)
            .map(|editor| editor as &mut dyn Editor)
    }

    fn settings(&self) -> &SettingsStore {
        &self.settings
    }
}
