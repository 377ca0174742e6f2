use std::io;
use thiserror::Error;

/// Custom error types for grammar construction and text conversion
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown non-terminal: {0}")]
    UnknownNonTerminal(String),

    #[error("Empty production: {0}")]
    EmptyProduction(String),

    #[error("Non-terminal '{0}' cannot derive a finite sentence")]
    Unproductive(String),
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, Error>;
