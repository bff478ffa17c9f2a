//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file not found or not a regular file
    FileNotFound(String),
    /// Configuration file could not be parsed or is invalid
    ConfigError(String),
    /// Chunking or emission failed
    ChunkingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ChunkingError(msg) => write!(f, "Chunking error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<mdchunk_core::ChunkError> for CliError {
    fn from(err: mdchunk_core::ChunkError) -> Self {
        match err {
            mdchunk_core::ChunkError::Config(msg) => CliError::ConfigError(msg),
            other => CliError::ChunkingError(other.to_string()),
        }
    }
}
