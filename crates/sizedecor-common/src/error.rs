//! Unified error types for the sizedecor workspace.
//!
//! Rendering a size never fails; these variants cover the surrounding
//! plumbing: configuration files and printf-style directives.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum SizeDecorError {
    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A configuration value is invalid.
    #[error("invalid configuration: {message}")]
    Config {
        /// Description of the invalid configuration.
        message: String,
    },

    /// A format directive could not be parsed.
    #[error("invalid directive {directive:?}: {message}")]
    Directive {
        /// The directive as supplied.
        directive: String,
        /// What is wrong with it.
        message: String,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {source}")]
    Serialization {
        /// Underlying serialization error.
        #[from]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SizeDecorError>;
