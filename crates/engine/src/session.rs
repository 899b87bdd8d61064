//! Per-build accumulation state
//!
//! A [`BuildSession`] collects the source text observed during one build
//! pass and produces the digest from it exactly once. Sessions are reset
//! at the start and end of a pass so a single instance can serve
//! consecutive builds without leaking text between them.

use crate::digest;
use crate::error::Result;
use crate::settings::HashArgs;

/// Mutable per-build state: accumulated source text plus the digest
/// computed from it
#[derive(Debug, Default)]
pub struct BuildSession {
    source: String,
    digest: Option<String>,
}

impl BuildSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one observed source unit, followed by a newline
    ///
    /// No validation is performed; an empty string appends a bare
    /// newline. Units are kept in receipt order with no deduplication.
    pub fn observe(&mut self, code: &str) {
        self.source.push_str(code);
        self.source.push('\n');
    }

    /// The accumulated source text
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The digest computed by [`finalize`](Self::finalize), if any
    pub fn digest(&self) -> Option<&str> {
        self.digest.as_deref()
    }

    /// Whether nothing has been observed since the last reset
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Compute the digest over the accumulated text
    ///
    /// The digest is computed at most once per session; later calls
    /// return the cached value.
    ///
    /// # Errors
    ///
    /// Fails when the configured digest algorithm is unknown.
    pub fn finalize(&mut self, args: &HashArgs) -> Result<String> {
        if let Some(digest) = &self.digest {
            return Ok(digest.clone());
        }

        let digest = digest::compute(self.source.as_bytes(), args)?;
        self.digest = Some(digest.clone());
        Ok(digest)
    }

    /// Clear all accumulated state, making the session reusable for an
    /// independent build pass
    pub fn reset(&mut self) {
        self.source.clear();
        self.digest = None;
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_observe_appends_with_newline() {
        let mut session = BuildSession::new();
        session.observe("const a = 1;");
        session.observe("const b = 2;");

        assert_eq!(session.source(), "const a = 1;\nconst b = 2;\n");
    }

    #[test]
    fn test_observe_empty_string_appends_bare_newline() {
        let mut session = BuildSession::new();
        session.observe("");

        assert_eq!(session.source(), "\n");
        assert!(!session.is_empty());
    }

    #[test]
    fn test_finalize_is_cached() {
        let mut session = BuildSession::new();
        session.observe("const a = 1;");

        let first = session.finalize(&HashArgs::default()).unwrap();
        let second = session.finalize(&HashArgs::default()).unwrap();

        assert_eq!(first, second);
        assert_eq!(session.digest(), Some(first.as_str()));
    }

    #[test]
    fn test_reset_clears_source_and_digest() {
        let mut session = BuildSession::new();
        session.observe("const a = 1;");
        session.finalize(&HashArgs::default()).unwrap();

        session.reset();

        assert!(session.is_empty());
        assert_eq!(session.digest(), None);
    }

    #[test]
    fn test_sequential_sessions_are_independent() {
        let mut session = BuildSession::new();
        session.observe("build one");
        let first = session.finalize(&HashArgs::default()).unwrap();
        session.reset();

        session.observe("build one");
        let second = session.finalize(&HashArgs::default()).unwrap();

        // A leak would accumulate "build one" twice and change the digest.
        assert_eq!(first, second);
    }
}
