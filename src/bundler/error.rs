//! Error types for bundler operations.
//!
//! Every stage failure is fatal to the whole run; these types exist so that
//! the distinct precondition violations (missing version element, missing
//! launcher anchor, failed runtime-image build) surface as their own error
//! kinds instead of bare assertions.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for all bundler operations
#[derive(Error, Debug)]
pub enum Error {
    /// Catch-all with a preformatted message (see [`crate::bail`])
    #[error("{0}")]
    GenericError(String),

    /// IO errors without path context
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// IO errors annotated with the operation and path that failed
    #[error("failed {operation} '{}': {source}", path.display())]
    Fs {
        /// What the bundler was doing
        operation: &'static str,
        /// Path the operation was applied to
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON errors while rewriting `.lsp-cli.json`
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Zip archive errors
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Network failure while fetching the JDK archive
    #[error("download failed for '{url}': {source}")]
    Download {
        /// URL that was being fetched
        url: String,
        /// Underlying HTTP error
        source: reqwest::Error,
    },

    /// An external command could not be spawned
    #[error("failed to execute '{command}': {error}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Underlying IO error
        error: std::io::Error,
    },

    /// jlink ran but did not produce a usable runtime image
    #[error("runtime image build failed (jlink exit code {code:?})")]
    RuntimeImageFailed {
        /// Exit code reported by jlink, if any
        code: Option<i32>,
    },

    /// The build descriptor contains no version element
    #[error("no <version> element found in '{}'", path.display())]
    VersionNotFound {
        /// Descriptor that was searched
        path: PathBuf,
    },

    /// A launcher script is missing its insertion anchor line
    #[error("no anchor line found in launcher script '{}'", path.display())]
    AnchorNotFound {
        /// Script that was searched
        path: PathBuf,
    },
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)).into())
    };
}

/// Attaches a message to `Option`/`Result` values, converting to [`Error`].
pub trait Context<T> {
    /// Replace `None`/`Err` with a [`Error::GenericError`] carrying `msg`.
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{msg}: {e}")))
    }
}

/// Adds filesystem context to raw IO results.
pub trait ErrorExt<T> {
    /// Convert an IO error into [`Error::Fs`], recording what was being done
    /// and to which path.
    fn fs_context(self, operation: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, operation: &'static str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            operation,
            path: path.to_path_buf(),
            source,
        })
    }
}
