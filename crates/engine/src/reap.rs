//! Stale build cleanup
//!
//! After substitution, files emitted by earlier passes are still sitting
//! in the output directory under names like `bundle-a1b2c3.js`. The
//! reaper reconstructs the expected name shape from each artifact's
//! pre-substitution name — the literal text before and after the
//! placeholder with a digest-length run of word characters in between —
//! and deletes every directory entry matching it, excluding the file
//! emitted by the current pass.

use regex::Regex;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use sourcehash_core::System;

use crate::bundle::{Bundle, OutputOptions};
use crate::error::{Error, Result};

/// Delete outdated builds from the output directory
///
/// A no-op when no output directory is configured or the configured
/// directory does not exist. Returns the paths that were deleted (or,
/// with a dry-run system, would have been deleted).
///
/// Individual deletion failures are logged and skipped; a directory
/// listing failure is fatal.
pub fn reap<S: System>(
    system: &S,
    bundle: &Bundle,
    digest: &str,
    file_placeholder: &str,
    options: &OutputOptions,
) -> Result<Vec<PathBuf>> {
    let Some(output_dir) = options.output_directory() else {
        debug!("No output directory configured, skipping stale build cleanup");
        return Ok(Vec::new());
    };

    if !system.exists(&output_dir) {
        debug!(
            "Output directory {} does not exist, skipping stale build cleanup",
            output_dir.display()
        );
        return Ok(Vec::new());
    }

    let output_dir = system.canonicalize(&output_dir)?;
    let entries = system.read_dir(&output_dir)?;

    let mut deleted = Vec::new();

    for (key, artifact) in bundle.iter() {
        // The key still carries the placeholder; the artifact's file
        // name has already been rewritten.
        let Some((prefix, suffix)) = key.split_once(file_placeholder) else {
            continue;
        };

        let matcher = stale_name_pattern(prefix, suffix, digest.len())?;

        for entry in &entries {
            if entry == &artifact.file_name || !matcher.is_match(entry) {
                continue;
            }

            let path = output_dir.join(entry);
            info!("Deleting outdated build: {entry}");

            match system.remove_file(&path) {
                Ok(()) => deleted.push(path),
                Err(err) => warn!("Could not delete outdated build {entry}: {err}"),
            }
        }
    }

    Ok(deleted)
}

/// Build the pattern matching names produced by earlier passes: the
/// literal prefix and suffix around the placeholder with a digest-length
/// run of word characters in between
///
/// Prefix and suffix come from user configuration and file names, so
/// both are escaped before being embedded. The pattern is unanchored; a
/// substring match is sufficient.
fn stale_name_pattern(prefix: &str, suffix: &str, digest_length: usize) -> Result<Regex> {
    let pattern = format!(
        "{}\\w{{{digest_length}}}{}",
        regex::escape(prefix),
        regex::escape(suffix)
    );

    Regex::new(&pattern).map_err(|source| Error::Pattern { pattern, source })
}
