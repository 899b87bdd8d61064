//! Base error types for sourcehash
//!
//! This module defines the filesystem-facing error types shared across the
//! workspace. We use `thiserror` for structured error handling with good
//! error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Base error type for filesystem operations
#[derive(Error, Debug)]
pub enum Error {
    /// Error listing a directory
    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        /// Directory that could not be listed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error removing a file
    #[error("Failed to remove file {path}: {source}")]
    FileRemove {
        /// File that could not be removed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Error resolving a path to its absolute form
    #[error("Failed to resolve path {path}: {source}")]
    PathResolve {
        /// Path that could not be resolved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
