//! Chunker error types

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors raised while reading, chunking or emitting a document
#[derive(Error, Debug)]
pub enum ChunkError {
    /// I/O error tied to a filesystem path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// I/O error from a reader with no associated path
    #[error("I/O error: {0}")]
    Read(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Heading pattern failed to compile
    #[error("invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Manifest serialization error
    #[error("manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl ChunkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ChunkError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for chunker operations
pub type Result<T> = std::result::Result<T, ChunkError>;
