use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while loading or reading settings.
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    /// The settings text is not valid JSON.
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    /// Reading a settings file failed.
    Io(#[from] std::io::Error),

    #[error("settings must be a JSON object")]
    /// The settings document is valid JSON but not an object.
    NotAnObject,

    #[error("setting '{0}' is not defined")]
    /// No layer, not even the declared defaults, provides the key.
    MissingValue(String),

    #[error("setting '{key}' must be a {expected}")]
    /// The value exists but has the wrong JSON type.
    InvalidType {
        /// The offending key.
        key: String,
        /// The expected JSON type.
        expected: &'static str,
    },
}
