//! Error types
//!
//! The codec core is total: builders and assemblers never fail. Errors
//! only arise at the file-facing edges: saving a document, and parsing
//! a database version string read from foreign input.

use std::io;
use thiserror::Error;

/// Error type for the file-facing operations.
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported database version string
    #[error("Unsupported database version: {0:?}")]
    UnsupportedVersion(String),
}

/// Result type alias for file-facing operations.
pub type Result<T> = std::result::Result<T, DxfError>;
