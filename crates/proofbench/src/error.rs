//! error types for proofbench

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("output has no line {line} (only {available} lines)")]
    MissingLine { line: usize, available: usize },

    #[error("line {line} has no field {field} (only {available} `=`-separated fields)")]
    MissingField {
        line: usize,
        field: usize,
        available: usize,
    },

    #[error("line {line} field {field}: {text:?} is not a number")]
    InvalidNumber {
        line: usize,
        field: usize,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl BenchError {
    /// Whether the error came from reading the child's output rather than
    /// from launching it or from configuration.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            BenchError::MissingLine { .. }
                | BenchError::MissingField { .. }
                | BenchError::InvalidNumber { .. }
        )
    }
}
