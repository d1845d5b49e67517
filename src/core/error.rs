//! Error types and error handling for the paperchunk engine.
//!
//! The chunking core itself never fails: blank text, empty sections
//! and odd headings all degrade to "no chunk". These errors belong to
//! the layers around it (configuration, corpus loading, output).

use thiserror::Error;

/// Result type alias for paperchunk operations
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Main error type for paperchunk
#[derive(Error, Debug)]
pub enum ChunkError {
    #[error("Missing input for document {id}: {what}")]
    MissingInput { id: String, what: String },

    #[error("Invalid metadata for document {id}: {message}")]
    InvalidMetadata { id: String, message: String },

    #[error("Unknown chunking strategy: {0}")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ChunkError {
    /// Check if the error only affects a single document.
    ///
    /// Skippable errors are logged by the batch driver, which then
    /// moves on to the next document.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            ChunkError::MissingInput { .. } | ChunkError::InvalidMetadata { .. }
        )
    }

    /// Check if this is a bad request error (invalid user input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ChunkError::UnknownStrategy(_) | ChunkError::ConfigError(_)
        )
    }
}
