use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use trailing_config::{ConfigError, SettingsScope, SettingsStore, TrailingSettings};

#[test]
fn test_defaults_apply_without_user_settings() {
    let store = SettingsStore::from_json_str("{}").unwrap();
    assert_eq!(
        store.trailing_settings(SettingsScope::global()).unwrap(),
        TrailingSettings {
            jump_to_symbol: true
        }
    );
}

#[test]
fn test_language_overrides_win_over_user_settings() {
    let store = SettingsStore::from_json_str(
        r#"{
            "trailing.jumpToSymbol": false,
            "[rust]": { "trailing.jumpToSymbol": true }
        }"#,
    )
    .unwrap();

    assert!(!store.trailing_settings(SettingsScope::global()).unwrap().jump_to_symbol);
    assert!(
        !store
            .trailing_settings(SettingsScope::language("json"))
            .unwrap()
            .jump_to_symbol
    );
    assert!(
        store
            .trailing_settings(SettingsScope::language("rust"))
            .unwrap()
            .jump_to_symbol
    );
}

#[test]
fn test_wrong_type_is_reported() {
    let store = SettingsStore::from_json_str(r#"{ "trailing.jumpToSymbol": "yes" }"#).unwrap();
    let err = store.trailing_settings(SettingsScope::global()).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidType {
            expected: "boolean",
            ..
        }
    ));
}

#[test]
fn test_non_object_settings_are_rejected() {
    assert!(matches!(
        SettingsStore::from_json_str("[1, 2]"),
        Err(ConfigError::NotAnObject)
    ));
    assert!(matches!(
        SettingsStore::from_json_str("{ nope"),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        SettingsStore::from_json_str(r#"{ "[rust]": true }"#),
        Err(ConfigError::InvalidType {
            expected: "object",
            ..
        })
    ));
}

#[test]
fn test_store_without_defaults_fails_fast() {
    let mut store = SettingsStore::new();
    assert!(matches!(
        store.trailing_settings(SettingsScope::global()),
        Err(ConfigError::MissingValue(_))
    ));

    store.set_language("python", "trailing.jumpToSymbol", json!(false));
    assert!(matches!(
        store.trailing_settings(SettingsScope::global()),
        Err(ConfigError::MissingValue(_))
    ));
    assert!(
        !store
            .trailing_settings(SettingsScope::language("python"))
            .unwrap()
            .jump_to_symbol
    );

    store.set_user("trailing.jumpToSymbol", json!(true));
    assert!(store.trailing_settings(SettingsScope::global()).unwrap().jump_to_symbol);
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "trailing": {{ "jumpToSymbol": false }} }}"#).unwrap();

    let store = SettingsStore::from_path(file.path()).unwrap();
    assert!(!store.trailing_settings(SettingsScope::global()).unwrap().jump_to_symbol);

    assert!(matches!(
        SettingsStore::from_path(file.path().with_extension("missing")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_settings_serialize_in_camel_case() {
    let value = serde_json::to_value(TrailingSettings::default()).unwrap();
    assert_eq!(value, json!({ "jumpToSymbol": true }));

    let parsed: TrailingSettings = serde_json::from_value(json!({})).unwrap();
    assert_eq!(parsed, TrailingSettings::default());
}
