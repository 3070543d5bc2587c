//! Error types for Forkwise
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//!
//! Missing inputs are never errors. Everything here is either a malformed
//! project file or a lookup the caller asked for explicitly.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Forkwise operations
pub type ForkwiseResult<T> = Result<T, ForkwiseError>;

/// Main error type for Forkwise operations
#[derive(Error, Debug)]
pub enum ForkwiseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Project file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// `.env` file could not be parsed
    #[error("invalid env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    /// Project was written against a different network catalog
    #[error("network catalog version {found} is not supported (expected {expected})")]
    CatalogVersion { expected: u32, found: u32 },

    /// Endpoint template references an input that is not known
    #[error("network '{network}' references unknown placeholder '${{{placeholder}}}'")]
    UnresolvedPlaceholder { network: String, placeholder: String },

    /// Custom network has nothing to connect to
    #[error("network '{network}' has no endpoint url")]
    MissingEndpoint { network: String },

    /// Requested network is not declared by the project
    #[error("unknown network '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownNetwork {
        name: String,
        suggestion: Option<String>,
    },

    /// Fork source is not declared by the project (strict fork policy only)
    #[error("fork source '{name}' is not a network declared by this project")]
    UnknownForkSource { name: String },

    /// Report could not be encoded as JSON or YAML
    #[error("failed to encode output: {0}")]
    Encode(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" - did you mean '{}'?", s),
        None => String::new(),
    }
}
