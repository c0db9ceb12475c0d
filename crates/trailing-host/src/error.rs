use thiserror::Error;
use trailing_config::ConfigError;
use trailing_core::{DocumentError, ToggleError};

#[derive(Debug, Error)]
/// Errors produced while executing a command against an editor.
pub enum HostError {
    #[error("unknown command: {0}")]
    /// No registered command has this id.
    UnknownCommand(String),

    #[error("configuration error: {0}")]
    /// A setting could not be resolved.
    Config(#[from] ConfigError),

    #[error("toggle failed: {0}")]
    /// The engine rejected its input.
    Toggle(#[from] ToggleError),

    #[error("failed to apply edits: {0}")]
    /// The editor rejected the edit batch; nothing was changed.
    Apply(#[from] DocumentError),
}
