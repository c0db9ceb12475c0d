//! Trailing symbols and the commands defined for them.

use trailing_core::Marker;

/// Suffix of commands that open a new line after the inserted symbol.
pub const COMMAND_WITH_NEW_LINE_SUFFIX: &str = "WithNewLine";

/// Prefix shared by every command id.
pub const COMMAND_PREFIX: &str = "trailing.toggle";

/// Symbols that have toggle commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailingSymbol {
    /// `,`
    Comma,
}

impl TrailingSymbol {
    /// Every symbol with commands.
    pub const ALL: [TrailingSymbol; 1] = [TrailingSymbol::Comma];

    /// The symbol text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comma => ",",
        }
    }

    /// Name used in command ids (`trailing.toggleComma`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Comma => "Comma",
        }
    }

    /// Marker for the engine.
    pub fn marker(self) -> Marker {
        match self {
            Self::Comma => Marker::comma(),
        }
    }
}

/// A toggle command: which symbol, and whether a line is opened after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrailingCommand {
    /// Command id (e.g. `trailing.toggleCommaWithNewLine`).
    pub id: String,
    /// Symbol toggled by the command.
    pub symbol: TrailingSymbol,
    /// Whether the command opens a new line after an inserted symbol.
    pub add_new_line: bool,
}

impl TrailingCommand {
    /// Build the command for `symbol`; the id is derived from the symbol name.
    pub fn new(symbol: TrailingSymbol, add_new_line: bool) -> Self {
        let suffix = if add_new_line {
            COMMAND_WITH_NEW_LINE_SUFFIX
        } else {
            ""
        };
        Self {
            id: format!("{COMMAND_PREFIX}{}{suffix}", symbol.name()),
            symbol,
            add_new_line,
        }
    }
}

/// The full command table: one plain and one new-line command per symbol.
pub fn trailing_definitions() -> Vec<TrailingCommand> {
    TrailingSymbol::ALL
        .iter()
        .flat_map(|&symbol| {
            [
                TrailingCommand::new(symbol, false),
                TrailingCommand::new(symbol, true),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_match_command_ids() {
        let ids: Vec<_> = trailing_definitions().into_iter().map(|c| c.id).collect();
        assert_eq!(
            ids,
            vec!["trailing.toggleComma", "trailing.toggleCommaWithNewLine"]
        );
    }

    #[test]
    fn test_new_line_flag_follows_suffix() {
        for command in trailing_definitions() {
            assert_eq!(
                command.id.ends_with(COMMAND_WITH_NEW_LINE_SUFFIX),
                command.add_new_line
            );
            assert_eq!(command.symbol.marker().as_str(), command.symbol.as_str());
        }
    }
}
