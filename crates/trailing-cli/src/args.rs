//! Command line arguments.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use trailing_core::{Position, Selection};

#[derive(Parser, Debug)]
#[command(name = "trailing")]
#[command(about = "Toggle a trailing marker at the end of every line touched by a cursor", long_about = None)]
#[command(version)]
pub struct Args {
    /// File to edit. Use "-" for stdin.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Cursor position, zero based, column in UTF-16 units (e.g. 3:0). Repeatable.
    #[arg(long = "cursor", value_name = "LINE:COL", value_parser = parse_position)]
    pub cursors: Vec<Position>,

    /// Selection from anchor to active (e.g. 0:0-0:4). Repeatable.
    #[arg(long = "select", value_name = "L:C-L:C", value_parser = parse_selection)]
    pub selections: Vec<Selection>,

    /// Marker to toggle.
    #[arg(long, default_value = ",")]
    pub marker: String,

    /// Open an indented line after each inserted marker.
    #[arg(long)]
    pub new_line: bool,

    /// Move cursors to the toggled marker (overrides settings).
    #[arg(long, conflicts_with = "no_jump")]
    pub jump: bool,

    /// Keep cursors where they were (overrides settings).
    #[arg(long)]
    pub no_jump: bool,

    /// Path to a JSON settings file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Language id used to pick per-language settings.
    #[arg(long, value_name = "ID")]
    pub language: Option<String>,

    /// Write the result back to FILE instead of printing it.
    #[arg(long)]
    pub in_place: bool,

    /// Print `{ text, edits, selections }` as JSON.
    #[arg(long)]
    pub json: bool,

    /// Log engine decisions to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// `--jump` / `--no-jump`, if either was given.
    pub fn jump_override(&self) -> Option<bool> {
        match (self.jump, self.no_jump) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Cursors then selections, sorted into document order.
    pub fn all_selections(&self) -> Result<Vec<Selection>> {
        let mut selections: Vec<_> = self
            .cursors
            .iter()
            .copied()
            .map(Selection::caret)
            .chain(self.selections.iter().copied())
            .collect();
        if selections.is_empty() {
            bail!("at least one --cursor or --select is required");
        }
        selections.sort_by_key(|s| s.start());
        Ok(selections)
    }

    /// Whether the input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }
}

/// Parse `LINE:COL`.
pub fn parse_position(input: &str) -> Result<Position> {
    let (line, column) = input
        .split_once(':')
        .with_context(|| format!("expected LINE:COL, got {input:?}"))?;
    let line = line
        .trim()
        .parse()
        .with_context(|| format!("invalid line in {input:?}"))?;
    let column = column
        .trim()
        .parse()
        .with_context(|| format!("invalid column in {input:?}"))?;
    Ok(Position::new(line, column))
}

/// Parse `L:C-L:C` (anchor then active).
pub fn parse_selection(input: &str) -> Result<Selection> {
    let (anchor, active) = input
        .split_once('-')
        .with_context(|| format!("expected L:C-L:C, got {input:?}"))?;
    Ok(Selection::new(parse_position(anchor)?, parse_position(active)?))
}
