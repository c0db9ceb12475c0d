#![warn(missing_docs)]
//! `trailing-config` - settings for the trailing marker toggle.
//!
//! Settings are flat, dotted keys (`trailing.jumpToSymbol`) resolved through three layers, most
//! specific first:
//!
//! 1. per-language overrides (`"[rust]": { "trailing.jumpToSymbol": false }`)
//! 2. user settings
//! 3. declared defaults (from [`TrailingSettings::default`])
//!
//! Nested objects are accepted too: `{ "trailing": { "jumpToSymbol": false } }` is the same as
//! `{ "trailing.jumpToSymbol": false }`.

mod error;
mod store;

pub use error::ConfigError;
pub use store::{SettingsScope, SettingsStore};

use serde::{Deserialize, Serialize};

/// Configuration section owning every key of this crate.
pub const SECTION: &str = "trailing";

/// Key (inside [`SECTION`]) of the jump-to-symbol switch.
pub const JUMP_TO_SYMBOL: &str = "jumpToSymbol";

/// Resolved settings for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrailingSettings {
    /// Move cursors to the toggled marker (or the opened line) after toggling.
    #[serde(default = "default_true")]
    pub jump_to_symbol: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TrailingSettings {
    fn default() -> Self {
        Self {
            jump_to_symbol: default_true(),
        }
    }
}

/// Fully qualified key (`section.name`).
pub fn qualified_key(name: &str) -> String {
    format!("{SECTION}.{name}")
}
