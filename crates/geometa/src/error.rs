//! Error types for the geometa library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for geometa operations.
#[derive(Debug, Error)]
pub enum GeometaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the HTTP client (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching '{url}'")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// URL scheme the fetcher cannot retrieve.
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    /// Metadata record cannot be decoded to text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for geometa operations.
pub type Result<T> = std::result::Result<T, GeometaError>;
