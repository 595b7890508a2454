//! Error types for loading and reading configuration documents.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a document or deserializing one of its trees.
///
/// Typed getters never produce these; a missing or mismatched value falls back
/// to a default instead.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Failed to access env file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse env document: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("Env document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("invalid env value, expects {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Failed to deserialize env value: {0}")]
    Deserialize(#[source] toml::de::Error),

    #[error("Failed to encode env value: {0}")]
    Encode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl EnvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EnvError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for EnvError {
    fn from(err: config::ConfigError) -> Self {
        EnvError::Settings(err.to_string())
    }
}
