//! Command registry and invocation.
//!
//! [`CommandRegistry::activate`] registers the command table from
//! [`crate::symbols::trailing_definitions`]. Executing a command resolves the active editor and
//! its settings once, hands plain data to the engine, applies the resulting batch as one
//! transaction and installs the new selections.

use crate::editor::{Editor, Workspace};
use crate::error::HostError;
use crate::symbols::{TrailingCommand, trailing_definitions};
use trailing_config::{SettingsScope, SettingsStore};
use trailing_core::{Marker, ToggleEngine, ToggleOptions, ToggleOutcome};
use tracing::{debug, info, warn};

/// Registered toggle commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<TrailingCommand>,
}

impl CommandRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every command of the command table.
    pub fn activate() -> Self {
        let mut registry = Self::new();
        for command in trailing_definitions() {
            registry.register(command);
        }
        registry
    }

    /// Register a command, replacing any command with the same id.
    pub fn register(&mut self, command: TrailingCommand) {
        self.commands.retain(|c| c.id != command.id);
        self.commands.push(command);
    }

    /// Remove a command.
    pub fn unregister(&mut self, id: &str) {
        self.commands.retain(|c| c.id != id);
    }

    /// Look a command up.
    pub fn get(&self, id: &str) -> Option<&TrailingCommand> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Registered commands, in registration order.
    pub fn commands(&self) -> &[TrailingCommand] {
        &self.commands
    }

    /// Execute `id` against the active editor of `workspace`.
    ///
    /// Returns `Ok(None)` when there is nothing to do (no active editor, no selections).
    pub fn execute(
        &self,
        id: &str,
        workspace: &mut dyn Workspace,
    ) -> Result<Option<ToggleOutcome>, HostError> {
        let command = self
            .get(id)
            .ok_or_else(|| HostError::UnknownCommand(id.to_string()))?;
        info!(command = %command.id, "executing command");

        let settings = workspace.settings().clone();
        let Some(editor) = workspace.active_editor_mut() else {
            debug!(command = %command.id, "no active editor");
            return Ok(None);
        };
        run_toggle(
            editor,
            &settings,
            command.symbol.marker(),
            command.add_new_line,
        )
    }
}

/// Toggle `marker` in `editor` using the settings scoped to its document.
///
/// Returns the outcome that was applied, or `None` if the editor has no selections.
pub fn run_toggle(
    editor: &mut dyn Editor,
    settings: &SettingsStore,
    marker: Marker,
    add_new_line: bool,
) -> Result<Option<ToggleOutcome>, HostError> {
    let scope = SettingsScope {
        language_id: editor.language_id(),
    };
    let jump_to_symbol = settings.trailing_settings(scope)?.jump_to_symbol;

    let selections = editor.selections();
    if selections.is_empty() {
        debug!("editor has no selections");
        return Ok(None);
    }

    let engine = ToggleEngine::new(
        marker,
        ToggleOptions {
            add_new_line,
            jump_to_symbol,
        },
    );
    let outcome = engine.toggle(editor.lines(), &selections)?;

    if let Err(err) = editor.apply_edits(&outcome.edits) {
        warn!(%err, "editor rejected the edit batch");
        return Err(err.into());
    }
    editor.set_selections(outcome.selections.clone());
    Ok(Some(outcome))
}
