//! Document store port
//!
//! Defines the interface for loading source documents and saving results.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::super::models::SourceDocument;

/// Errors raised while loading or saving a document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The output could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Path that was written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

/// Loads source documents and saves retained lines
pub trait DocumentStore {
    /// Load the document at `path`, keeping line terminators
    fn load(&self, path: &Path) -> Result<SourceDocument, DocumentError>;

    /// Write `lines` verbatim to `path`
    ///
    /// The written file takes its permissions from `like` when given, so an
    /// output can later replace its input unchanged. Implementations must not
    /// leave a partially written file at `path`.
    fn save(&self, path: &Path, lines: &[&str], like: Option<&Path>) -> Result<(), DocumentError>;
}
