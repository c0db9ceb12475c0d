//! `trailing` - toggle trailing markers from the command line.
//!
//! ```bash
//! # add (or remove) a trailing comma on lines 1 and 2, print the result
//! trailing list.json --cursor 1:0 --cursor 2:0
//!
//! # same, opening an indented line after each comma, writing the file back
//! trailing list.json --cursor 1:0 --new-line --in-place
//!
//! # edits and new selections as LSP-shaped JSON
//! trailing list.json --select 0:0-0:4 --no-jump --json
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`, `-v` for `debug`).

mod args;

use anyhow::{Context, Result, bail};
use args::Args;
use clap::Parser;
use serde_json::json;
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;
use trailing_config::{JUMP_TO_SYMBOL, SettingsStore, qualified_key};
use trailing_core::Marker;
use trailing_host::lsp::outcome_to_value;
use trailing_host::{MemoryEditor, run_toggle};

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_settings(args: &Args) -> Result<SettingsStore> {
    let mut settings = match &args.config {
        Some(path) => SettingsStore::from_path(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => SettingsStore::with_declared_defaults(),
    };
    if let Some(jump) = args.jump_override() {
        settings.set_user(qualified_key(JUMP_TO_SYMBOL), json!(jump));
    }
    Ok(settings)
}

fn read_input(args: &Args) -> Result<String> {
    if args.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.in_place && args.reads_stdin() {
        bail!("--in-place needs a file, not stdin");
    }

    let selections = args.all_selections()?;
    let marker = Marker::new(args.marker.clone())?;
    let settings = load_settings(&args)?;
    let text = read_input(&args)?;

    let mut editor = MemoryEditor::new(&text).with_selections(selections);
    if let Some(language) = &args.language {
        editor = editor.with_language(language.clone());
    }

    let outcome = run_toggle(&mut editor, &settings, marker, args.new_line)?;
    let result = editor.document().text_with_line_ending();
    tracing::debug!(
        edits = outcome.as_ref().map_or(0, |o| o.edits.len()),
        "toggle finished"
    );

    if args.in_place {
        std::fs::write(&args.file, &result)
            .with_context(|| format!("Failed to write {}", args.file.display()))?;
    }

    let mut stdout = io::stdout().lock();
    if args.json {
        let mut value = outcome
            .as_ref()
            .map(outcome_to_value)
            .unwrap_or_else(|| json!({ "edits": [], "selections": [] }));
        value["text"] = json!(result);
        serde_json::to_writer_pretty(&mut stdout, &value).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else if !args.in_place {
        stdout.write_all(result.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
