//! Build output types
//!
//! The host build tool hands the hook its full output set as a
//! [`Bundle`]: an insertion-ordered map keyed by the file name each
//! artifact was emitted under. The key is fixed at insertion time, while
//! the artifact's `file_name` field is rewritten by substitution. The
//! stale-build reaper relies on that distinction to reconstruct the
//! pre-substitution name pattern.

use indexmap::IndexMap;
use std::path::PathBuf;

/// One emitted build output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Output file name, rewritten in place by substitution
    pub file_name: String,

    /// Code body; present for script chunks, absent for other assets
    pub code: Option<String>,
}

impl Artifact {
    /// Create a script chunk with a code body
    pub fn chunk(file_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            code: Some(code.into()),
        }
    }

    /// Create a non-script asset without a code body
    pub fn asset(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            code: None,
        }
    }
}

/// The full output set of one build pass
///
/// Keys are the artifacts' file names at insertion time and never change
/// afterwards, even when substitution rewrites the artifacts' `file_name`
/// fields.
#[derive(Debug, Default)]
pub struct Bundle {
    entries: IndexMap<String, Artifact>,
}

impl Bundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an artifact, keyed by its current file name
    ///
    /// Replaces any previous artifact emitted under the same name.
    pub fn insert(&mut self, artifact: Artifact) {
        self.entries.insert(artifact.file_name.clone(), artifact);
    }

    /// Look up an artifact by its insertion-time file name
    pub fn get(&self, key: &str) -> Option<&Artifact> {
        self.entries.get(key)
    }

    /// Iterate over `(insertion-time name, artifact)` pairs, in
    /// insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.entries
            .iter()
            .map(|(key, artifact)| (key.as_str(), artifact))
    }

    /// Iterate mutably over the artifacts, in insertion order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Artifact> {
        self.entries.values_mut()
    }

    /// Number of artifacts in the bundle
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle holds no artifacts
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Output location configured for the build
///
/// Covers the two ways a host configures where output lands: a whole
/// directory, or a single output file whose parent directory is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Configured output directory
    pub dir: Option<PathBuf>,

    /// Configured single output file
    pub file: Option<PathBuf>,
}

impl OutputOptions {
    /// Output options for a directory target
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(path.into()),
            file: None,
        }
    }

    /// Output options for a single-file target
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            dir: None,
            file: Some(path.into()),
        }
    }

    /// Resolve the effective output directory: the configured directory,
    /// or the directory holding the configured output file
    pub fn output_directory(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.dir {
            return Some(dir.clone());
        }

        let parent = self.file.as_deref()?.parent()?;
        if parent.as_os_str().is_empty() {
            // A bare file name lives in the current directory.
            Some(PathBuf::from("."))
        } else {
            Some(parent.to_path_buf())
        }
    }
}
