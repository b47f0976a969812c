//! Error types for solarlead-core

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for solarlead-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in solarlead-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Configuration is missing, malformed or inconsistent
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// I/O failure, optionally tied to a path
    #[error("I/O error{}: {source}", at_path(.path))]
    Io {
        /// Path being accessed, if known
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Unknown FAQ category name
    #[error("Unknown FAQ category: {0}")]
    UnknownCategory(String),

    /// A service did not reach the ready state
    #[error("Service '{service}' not ready: {reason}")]
    NotReady {
        /// Service name
        service: String,
        /// Failure reason or last observed state
        reason: String,
    },
}

fn at_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error together with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: Some(path.to_path_buf()),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { path: None, source }
    }
}
