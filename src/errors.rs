//! Shared error types for covconsole

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for loading coverage data and configuration.
///
/// The reporter itself trusts its input and never produces these; they come
/// from the edges (reading tracefiles, parsing config, writing the init file).
#[derive(Debug, Error)]
pub enum Error {
    /// File system errors with the offending path
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed LCOV tracefile
    #[error("Invalid LCOV data in {path}: {message}")]
    Lcov { path: PathBuf, message: String },

    /// Malformed SimpleCov resultset
    #[error("Invalid SimpleCov resultset in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file errors
    #[error("Configuration error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// Refusing to overwrite an existing config file
    #[error("Configuration file {0} already exists. Use --force to overwrite.")]
    ConfigExists(PathBuf),
}

impl Error {
    /// Create an I/O error with path context
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an LCOV parse error
    pub fn lcov(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Lcov {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}

/// Result type alias for covconsole operations
pub type Result<T> = std::result::Result<T, Error>;
