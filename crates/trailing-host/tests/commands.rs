use pretty_assertions::assert_eq;
use serde_json::json;
use trailing_config::SettingsStore;
use trailing_core::{Marker, Position, Selection};
use trailing_host::lsp::{outcome_to_value, selections_from_value};
use trailing_host::{
    CommandRegistry, HostError, MemoryEditor, MemoryWorkspace, TrailingSymbol, run_toggle,
    trailing_definitions,
};

const TOGGLE: &str = "trailing.toggleComma";
const TOGGLE_WITH_NEW_LINE: &str = "trailing.toggleCommaWithNewLine";

fn caret(line: usize, character: usize) -> Selection {
    Selection::caret(Position::new(line, character))
}

fn range(anchor: (usize, usize), active: (usize, usize)) -> Selection {
    Selection::new(
        Position::new(anchor.0, anchor.1),
        Position::new(active.0, active.1),
    )
}

fn workspace(jump_to_symbol: bool) -> MemoryWorkspace {
    let mut workspace = MemoryWorkspace::new();
    workspace
        .settings_mut()
        .set_user("trailing.jumpToSymbol", json!(jump_to_symbol));
    workspace
}

/// Open `text` with `selections`, run `command`, return (text, selections).
fn run(
    workspace: &mut MemoryWorkspace,
    command: &str,
    text: &str,
    selections: Vec<Selection>,
) -> (String, Vec<Selection>) {
    workspace.close_all();
    let index = workspace.open(MemoryEditor::new(text).with_selections(selections));
    CommandRegistry::activate()
        .execute(command, workspace)
        .unwrap();
    let editor = workspace.editor(index).unwrap();
    (editor.text(), editor.document().selections().to_vec())
}

#[test]
fn test_activate_registers_every_definition() {
    let registry = CommandRegistry::activate();
    let ids: Vec<_> = registry.commands().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec![TOGGLE, TOGGLE_WITH_NEW_LINE]);
    assert_eq!(registry.commands(), trailing_definitions().as_slice());
}

#[test]
fn test_register_replaces_and_unregister_removes() {
    let mut registry = CommandRegistry::activate();
    registry.register(trailing_host::TrailingCommand::new(TrailingSymbol::Comma, false));
    assert_eq!(registry.commands().len(), 2);

    registry.unregister(TOGGLE);
    assert!(registry.get(TOGGLE).is_none());
    assert!(registry.get(TOGGLE_WITH_NEW_LINE).is_some());
}

#[test]
fn test_add_remove_and_toggle() {
    for jump in [true, false] {
        let mut ws = workspace(jump);

        let (text, selections) = run(&mut ws, TOGGLE, "test", vec![caret(0, 0)]);
        assert_eq!(text, "test,");
        assert_eq!(selections, vec![caret(0, if jump { 5 } else { 0 })]);

        let (text, selections) = run(&mut ws, TOGGLE, "test,", vec![caret(0, 0)]);
        assert_eq!(text, "test");
        assert_eq!(selections, vec![caret(0, if jump { 4 } else { 0 })]);
    }
}

#[test]
fn test_toggle_twice_in_the_same_editor() {
    let mut ws = workspace(true);
    let index = ws.open(MemoryEditor::new("test"));
    let registry = CommandRegistry::activate();

    registry.execute(TOGGLE, &mut ws).unwrap();
    assert_eq!(ws.editor(index).unwrap().text(), "test,");
    assert_eq!(ws.editor(index).unwrap().document().selections(), &[caret(0, 5)]);

    registry.execute(TOGGLE, &mut ws).unwrap();
    assert_eq!(ws.editor(index).unwrap().text(), "test");
    assert_eq!(ws.editor(index).unwrap().document().selections(), &[caret(0, 4)]);
    assert_eq!(ws.editor(index).unwrap().document().version(), 2);
}

#[test]
fn test_cursor_at_end_of_line() {
    let mut ws = workspace(true);
    let (text, selections) = run(&mut ws, TOGGLE, "test", vec![caret(0, 4)]);
    assert_eq!(text, "test,");
    assert_eq!(selections, vec![caret(0, 5)]);

    let (text, selections) = run(&mut ws, TOGGLE, "test,", vec![caret(0, 5)]);
    assert_eq!(text, "test");
    assert_eq!(selections, vec![caret(0, 4)]);

    let mut ws = workspace(false);
    let (_, selections) = run(&mut ws, TOGGLE, "test,", vec![caret(0, 5)]);
    assert_eq!(selections, vec![caret(0, 4)]);
}

#[test]
fn test_line_partially_selected() {
    let mut ws = workspace(false);
    let (text, selections) = run(&mut ws, TOGGLE, "test", vec![range((0, 0), (0, 2))]);
    assert_eq!(text, "test,");
    assert_eq!(selections, vec![range((0, 0), (0, 2))]);

    let (text, selections) = run(&mut ws, TOGGLE, "test,", vec![range((0, 3), (0, 5))]);
    assert_eq!(text, "test");
    assert_eq!(selections, vec![range((0, 3), (0, 4))]);

    let mut ws = workspace(true);
    let (_, selections) = run(&mut ws, TOGGLE, "test", vec![range((0, 0), (0, 2))]);
    assert_eq!(selections, vec![caret(0, 5)]);
}

#[test]
fn test_line_entirely_selected() {
    let mut ws = workspace(false);
    let (text, selections) = run(&mut ws, TOGGLE, "test", vec![range((0, 0), (0, 4))]);
    assert_eq!(text, "test,");
    assert_eq!(selections, vec![range((0, 0), (0, 5))]);

    let (text, selections) = run(&mut ws, TOGGLE, "test,", vec![range((0, 0), (0, 5))]);
    assert_eq!(text, "test");
    assert_eq!(selections, vec![range((0, 0), (0, 4))]);
}

#[test]
fn test_with_new_line_command() {
    let mut ws = workspace(true);
    let (text, selections) = run(
        &mut ws,
        TOGGLE_WITH_NEW_LINE,
        "{\n  \"a\": 1\n  \"b\": 2\n}",
        vec![caret(1, 0), caret(2, 0)],
    );
    assert_eq!(text, "{\n  \"a\": 1,\n  \n  \"b\": 2,\n  \n}");
    assert_eq!(selections, vec![caret(2, 2), caret(4, 2)]);
}

#[test]
fn test_language_override_changes_cursor_placement() {
    let settings = SettingsStore::from_json_str(
        r#"{ "trailing.jumpToSymbol": true, "[json]": { "trailing.jumpToSymbol": false } }"#,
    )
    .unwrap();
    let mut ws = MemoryWorkspace::with_settings(settings);
    let registry = CommandRegistry::activate();

    let plain = ws.open(MemoryEditor::new("a"));
    registry.execute(TOGGLE, &mut ws).unwrap();
    assert_eq!(ws.editor(plain).unwrap().document().selections(), &[caret(0, 2)]);

    let json = ws.open(MemoryEditor::new("a").with_language("json"));
    registry.execute(TOGGLE, &mut ws).unwrap();
    assert_eq!(ws.editor(json).unwrap().document().selections(), &[caret(0, 0)]);
}

#[test]
fn test_no_active_editor_is_a_no_op() {
    let mut ws = workspace(true);
    let outcome = CommandRegistry::activate().execute(TOGGLE, &mut ws).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_no_selections_is_a_no_op() {
    let mut ws = workspace(true);
    let index = ws.open(MemoryEditor::new("test").with_selections(Vec::new()));
    let outcome = CommandRegistry::activate().execute(TOGGLE, &mut ws).unwrap();
    assert!(outcome.is_none());
    assert_eq!(ws.editor(index).unwrap().text(), "test");
}

#[test]
fn test_unknown_command() {
    let mut ws = workspace(true);
    let err = CommandRegistry::activate()
        .execute("trailing.toggleSemicolon", &mut ws)
        .unwrap_err();
    assert!(matches!(err, HostError::UnknownCommand(id) if id == "trailing.toggleSemicolon"));
}

#[test]
fn test_missing_setting_fails_fast() {
    let mut ws = MemoryWorkspace::with_settings(SettingsStore::new());
    let index = ws.open(MemoryEditor::new("test"));
    let err = CommandRegistry::activate()
        .execute(TOGGLE, &mut ws)
        .unwrap_err();
    assert!(matches!(err, HostError::Config(_)));
    assert_eq!(ws.editor(index).unwrap().text(), "test");
}

#[test]
fn test_out_of_range_selection_leaves_document_untouched() {
    let mut editor = MemoryEditor::new("a\nb").with_selections(vec![caret(0, 0), caret(7, 0)]);
    let err = run_toggle(
        &mut editor,
        &SettingsStore::with_declared_defaults(),
        Marker::comma(),
        false,
    )
    .unwrap_err();
    assert!(matches!(err, HostError::Toggle(_)));
    assert_eq!(editor.text(), "a\nb");
    assert_eq!(editor.document().version(), 0);
}

#[test]
fn test_outcome_as_lsp_json() {
    let mut editor = MemoryEditor::new("    1").with_selections(vec![caret(0, 0)]);
    let outcome = run_toggle(
        &mut editor,
        &SettingsStore::with_declared_defaults(),
        Marker::comma(),
        true,
    )
    .unwrap()
    .unwrap();

    let value = outcome_to_value(&outcome);
    assert_eq!(
        value,
        json!({
            "edits": [
                {
                    "range": {
                        "start": { "line": 0, "character": 5 },
                        "end": { "line": 0, "character": 5 },
                    },
                    "newText": ",",
                },
                {
                    "range": {
                        "start": { "line": 0, "character": 5 },
                        "end": { "line": 0, "character": 5 },
                    },
                    "newText": "\n    ",
                },
            ],
            "selections": [
                {
                    "anchor": { "line": 1, "character": 4 },
                    "active": { "line": 1, "character": 4 },
                },
            ],
        })
    );
    assert_eq!(selections_from_value(&value["selections"]), vec![caret(1, 4)]);
    assert_eq!(editor.text(), "    1,\n    ");
}
