// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysError {
    /// A data row that could not be read. `line` is 1-based and counts header lines.
    #[error("line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("time series error: {0}")]
    Series(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhysResult<T> = Result<T, PhysError>;

impl PhysError {
    pub(crate) fn parse(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            column,
            message: message.into(),
        }
    }
}
