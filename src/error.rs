use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordCountGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to decode PDF document '{name}': {source}")]
    DocumentDecode {
        name: String,
        #[source]
        source: lopdf::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordCountGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
