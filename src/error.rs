//! Error types for BOSS
//!
//! The editing core is infallible; errors only come from the file,
//! configuration and terminal collaborators.

use thiserror::Error;

/// Result type alias for BOSS operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Editor error types
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Could not serialize configuration: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("No filename set")]
    NoFilename,

    #[error("{0}")]
    Message(String),
}
