//! Error types for splitrs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error returned by a chunk sink.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout the crate.
pub type Result<T, E = SplitError> = std::result::Result<T, E>;

/// Errors that can occur while splitting a byte stream or touching files.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input file could not be opened for reading.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred while reading input data.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// The chunk sink reported a failure.
    #[error("chunk sink failed: {0}")]
    Sink(#[source] BoxError),

    /// Invalid configuration parameter.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },

    /// A file that was expected to exist does not.
    #[error("file {} does not exist", .path.display())]
    NotFound {
        /// Missing path.
        path: PathBuf,
    },

    /// The working directory could not be determined.
    #[error("failed to resolve working directory: {0}")]
    CurrentDir(#[source] io::Error),

    /// Parent directories could not be created.
    #[error("failed to create directories for {}: {source}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// File contents could not be written.
    #[error("failed to write file {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl SplitError {
    /// Wraps a sink failure.
    pub(crate) fn sink(err: impl Into<BoxError>) -> Self {
        SplitError::Sink(err.into())
    }

    /// Returns true if this error came from the chunk sink.
    pub fn is_sink(&self) -> bool {
        matches!(self, SplitError::Sink(_))
    }
}
