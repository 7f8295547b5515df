use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JsonconfError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON document: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to parse TOML document: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

impl JsonconfError {
    /// Whether this error came from parsing, in which case the loader still
    /// handed out a fallback [`Config`](crate::Config).
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, JsonconfError::IoError { .. })
    }
}
