//! Error types for loading, sorting and saving verb collections

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while sorting a verb collection
#[derive(Debug, Error)]
pub enum SortError {
    /// The document is not valid JSON or is not an array of objects
    #[error("Invalid verb document {}: {reason}", .path.display())]
    Format {
        /// Document the problem was found in
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// Reading the source or writing the destination failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    pub(crate) fn format(path: &Path, reason: impl Into<String>) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this is a document format problem rather than an I/O failure
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

/// Result type for sorter operations
pub type Result<T> = std::result::Result<T, SortError>;
