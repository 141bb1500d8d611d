// src/error.rs
use thiserror::Error;

/// The only failures the resolver reports. Unmappable symbols are not errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("gloss is empty or whitespace-only")]
    EmptyInput,

    #[error("no gesture dictionary is loaded")]
    MissingDictionary,
}

/// Failures while building, loading or saving a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed gesture mapping: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed dictionary snapshot: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("could not persist dictionary snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("invalid entry '{key}': {reason}")]
    InvalidEntry { key: String, reason: &'static str },

    #[error("duplicate key after normalization: {0}")]
    DuplicateKey(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("could not load configuration: {0}")]
    Load(String),
}

impl From<::config::ConfigError> for ConfigError {
    fn from(e: ::config::ConfigError) -> Self {
        ConfigError::Load(e.to_string())
    }
}
