//! Error handling for the emotion analysis pipeline.

use std::io;
use std::path::PathBuf;

/// Specialized error type for emotion lexicon and network operations
#[derive(Debug, thiserror::Error)]
pub enum EmoGraphError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing lexicon or resource data
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Error parsing embedded or external JSON resources
    #[error("Resource error: {0}")]
    Resource(#[from] serde_json::Error),

    /// Malformed forma mentis edge file
    #[error("Edge file error in {path}: {message}")]
    EdgeFile {
        /// File the error was encountered in
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Operation not defined for the given network shape
    #[error("Network error: {0}")]
    Network(String),

    /// Invalid rendering parameter
    #[error("Render error: {0}")]
    Render(String),
}

impl EmoGraphError {
    /// Build a lexicon error from anything displayable
    pub fn lexicon(message: impl Into<String>) -> Self {
        Self::Lexicon(message.into())
    }

    /// Build a network error from anything displayable
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Result type for emotion analysis operations
pub type Result<T> = std::result::Result<T, EmoGraphError>;
