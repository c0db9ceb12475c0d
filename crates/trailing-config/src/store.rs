use crate::{ConfigError, JUMP_TO_SYMBOL, SECTION, TrailingSettings, qualified_key};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// The document a setting is read for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsScope<'a> {
    /// Language of the document (e.g. `rust`), if known.
    pub language_id: Option<&'a str>,
}

impl<'a> SettingsScope<'a> {
    /// Scope without a document: only user settings and defaults apply.
    pub fn global() -> Self {
        Self { language_id: None }
    }

    /// Scope of a document in `language_id`.
    pub fn language(language_id: &'a str) -> Self {
        Self {
            language_id: Some(language_id),
        }
    }
}

/// Layered settings: declared defaults, user values and per-language overrides.
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    defaults: Map<String, Value>,
    user: Map<String, Value>,
    languages: BTreeMap<String, Map<String, Value>>,
}

impl SettingsStore {
    /// An empty store without declared defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the defaults of [`TrailingSettings`].
    pub fn with_declared_defaults() -> Self {
        let mut store = Self::new();
        if let Ok(Value::Object(section)) = serde_json::to_value(TrailingSettings::default()) {
            flatten_into(&mut store.defaults, SECTION, section);
        }
        store
    }

    /// Parse user settings JSON on top of the declared defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let value: Value = serde_json::from_str(text)?;
        let mut store = Self::with_declared_defaults();
        store.merge_user_value(value)?;
        Ok(store)
    }

    /// Read user settings from a JSON file on top of the declared defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading settings");
        Self::from_json_str(&text)
    }

    /// Merge a settings object into the user layer.
    ///
    /// `"[language]"` keys go to the language layer.
    pub fn merge_user_value(&mut self, value: Value) -> Result<(), ConfigError> {
        let Value::Object(object) = value else {
            return Err(ConfigError::NotAnObject);
        };

        for (key, value) in object {
            if let Some(language) = language_key(&key).map(str::to_string) {
                let Value::Object(overrides) = value else {
                    return Err(ConfigError::InvalidType {
                        key,
                        expected: "object",
                    });
                };
                let layer = self.languages.entry(language).or_default();
                for (key, value) in overrides {
                    insert_flattened(layer, key, value);
                }
            } else {
                insert_flattened(&mut self.user, key, value);
            }
        }
        Ok(())
    }

    /// Set a user value.
    pub fn set_user(&mut self, key: impl Into<String>, value: Value) {
        self.user.insert(key.into(), value);
    }

    /// Set a value for one language.
    pub fn set_language(
        &mut self,
        language_id: impl Into<String>,
        key: impl Into<String>,
        value: Value,
    ) {
        self.languages
            .entry(language_id.into())
            .or_default()
            .insert(key.into(), value);
    }

    /// Look a key up, most specific layer first.
    pub fn get(&self, key: &str, scope: SettingsScope<'_>) -> Option<&Value> {
        scope
            .language_id
            .and_then(|language| self.languages.get(language))
            .and_then(|layer| layer.get(key))
            .or_else(|| self.user.get(key))
            .or_else(|| self.defaults.get(key))
    }

    /// Read a boolean, failing if it is missing or not a boolean.
    pub fn get_bool(&self, key: &str, scope: SettingsScope<'_>) -> Result<bool, ConfigError> {
        match self.get(key, scope) {
            Some(Value::Bool(value)) => Ok(*value),
            Some(_) => Err(ConfigError::InvalidType {
                key: key.to_string(),
                expected: "boolean",
            }),
            None => Err(ConfigError::MissingValue(key.to_string())),
        }
    }

    /// Resolve [`TrailingSettings`] for a document.
    pub fn trailing_settings(
        &self,
        scope: SettingsScope<'_>,
    ) -> Result<TrailingSettings, ConfigError> {
        Ok(TrailingSettings {
            jump_to_symbol: self.get_bool(&qualified_key(JUMP_TO_SYMBOL), scope)?,
        })
    }
}

fn language_key(key: &str) -> Option<&str> {
    key.strip_prefix('[')?.strip_suffix(']')
}

fn insert_flattened(layer: &mut Map<String, Value>, key: String, value: Value) {
    match value {
        Value::Object(object) => flatten_into(layer, &key, object),
        value => {
            layer.insert(key, value);
        }
    }
}

fn flatten_into(layer: &mut Map<String, Value>, prefix: &str, object: Map<String, Value>) {
    for (key, value) in object {
        insert_flattened(layer, format!("{prefix}.{key}"), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declared_defaults_enable_jump() {
        let store = SettingsStore::with_declared_defaults();
        assert_eq!(
            store.get("trailing.jumpToSymbol", SettingsScope::global()),
            Some(&json!(true))
        );
    }

    #[test]
    fn test_missing_value_fails_fast() {
        let store = SettingsStore::new();
        let err = store
            .get_bool("trailing.jumpToSymbol", SettingsScope::global())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingValue(key) if key == "trailing.jumpToSymbol"));
    }

    #[test]
    fn test_nested_objects_are_flattened() {
        let mut store = SettingsStore::new();
        store
            .merge_user_value(json!({ "trailing": { "jumpToSymbol": false } }))
            .unwrap();
        assert!(
            !store
                .get_bool("trailing.jumpToSymbol", SettingsScope::global())
                .unwrap()
        );
    }

    #[test]
    fn test_language_key_parsing() {
        assert_eq!(language_key("[rust]"), Some("rust"));
        assert_eq!(language_key("trailing.jumpToSymbol"), None);
    }
}
