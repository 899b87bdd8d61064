//! Filesystem capability for sourcehash
//!
//! This module provides a trait-based abstraction over the handful of
//! filesystem operations the stale-build reaper performs, enabling testing
//! and dry-run mode.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstraction over filesystem operations
///
/// This trait allows us to implement different backends:
/// - `RealSystem`: Actual filesystem operations
/// - `DryRunSystem`: Records deletions without executing them
/// - Mock implementations for testing
pub trait System {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Resolve a path to its absolute, symlink-free form
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// List the entry names of a directory
    fn read_dir(&self, path: &Path) -> Result<Vec<String>>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> Result<()>;
}

/// Real filesystem implementation
///
/// This implementation performs actual filesystem operations.
pub struct RealSystem;

impl System for RealSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        fs::canonicalize(path).map_err(|e| Error::PathResolve {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>> {
        let entries = fs::read_dir(path).map_err(|e| Error::DirectoryRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::DirectoryRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| Error::FileRemove {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Dry-run system that reads through to the real filesystem but records
/// destructive operations without executing them
///
/// This is useful for previewing which outdated builds a pass would
/// delete without actually modifying the output directory.
#[derive(Debug, Default)]
pub struct DryRunSystem {
    operations: std::cell::RefCell<Vec<Operation>>,
}

/// An operation that would be performed on the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Remove a file
    RemoveFile {
        /// File that would be removed
        path: PathBuf,
    },
}

impl DryRunSystem {
    /// Create a new dry-run system
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the list of operations that would be performed
    pub fn operations(&self) -> Vec<Operation> {
        self.operations.borrow().clone()
    }

    /// Record an operation
    fn record(&self, op: Operation) {
        self.operations.borrow_mut().push(op);
    }
}

impl System for DryRunSystem {
    fn exists(&self, path: &Path) -> bool {
        RealSystem.exists(path)
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        RealSystem.canonicalize(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<String>> {
        RealSystem.read_dir(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.record(Operation::RemoveFile {
            path: path.to_path_buf(),
        });
        Ok(())
    }
}
