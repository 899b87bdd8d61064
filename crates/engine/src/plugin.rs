//! Hook orchestration
//!
//! [`SourceHash`] wires the per-build pieces into the hook sequence a
//! host build tool drives: accumulate source text during transform,
//! then finalize once the output set is known (digest, substitution,
//! stale cleanup), then reset at teardown.

use tracing::debug;

use sourcehash_core::{RealSystem, System};

use crate::bundle::{Bundle, OutputOptions};
use crate::error::Result;
use crate::reap;
use crate::session::BuildSession;
use crate::settings::Settings;
use crate::substitute;

/// Source-hash build hook
///
/// One instance serves one build at a time; the session is reset at
/// build start and at teardown so consecutive builds stay independent.
/// Parallel builds need independent instances.
pub struct SourceHash<S = RealSystem>
where
    S: System,
{
    settings: Settings,
    session: BuildSession,
    system: S,
}

impl SourceHash<RealSystem> {
    /// Create a hook backed by the real filesystem
    pub fn new(settings: Settings) -> Self {
        Self::with_system(settings, RealSystem)
    }
}

impl<S> SourceHash<S>
where
    S: System,
{
    /// Create a hook with an explicit filesystem backend
    ///
    /// Useful for dry-run mode and tests.
    pub fn with_system(settings: Settings, system: S) -> Self {
        Self {
            settings,
            session: BuildSession::new(),
            system,
        }
    }

    /// The hook settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The per-build session state
    pub fn session(&self) -> &BuildSession {
        &self.session
    }

    /// The filesystem backend
    pub fn system(&self) -> &S {
        &self.system
    }

    /// Start-of-build hook
    ///
    /// Clears any residue left behind by an earlier pass that aborted
    /// before reaching teardown.
    pub fn build_start(&mut self) {
        self.session.reset();
    }

    /// Transform hook, called once per source unit in the order the
    /// host sees them
    pub fn transform(&mut self, code: &str) {
        self.session.observe(code);
    }

    /// Finalize hook, called exactly once after all sources are seen
    ///
    /// Digests the accumulated source, substitutes placeholders across
    /// the full output set, and deletes outdated builds when enabled.
    ///
    /// # Errors
    ///
    /// Fails when the configured digest algorithm is unknown or the
    /// output directory cannot be listed.
    pub fn generate_bundle(&mut self, options: &OutputOptions, bundle: &mut Bundle) -> Result<()> {
        let digest = self.session.finalize(&self.settings.hash_args)?;
        debug!("Source digest: {digest}");

        let code_placeholder = self.settings.code_placeholder();
        let file_placeholder = self.settings.file_placeholder();

        substitute::apply(bundle, &digest, code_placeholder, file_placeholder);

        if self.settings.auto_delete {
            if let Some(placeholder) = file_placeholder {
                reap::reap(&self.system, bundle, &digest, placeholder, options)?;
            }
        }

        Ok(())
    }

    /// Teardown hook
    ///
    /// Resets the session so the instance can serve a subsequent,
    /// independent build.
    pub fn close_bundle(&mut self) {
        self.session.reset();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::bundle::Artifact;
    use crate::settings::HashArgs;

    fn chunk_bundle() -> Bundle {
        let mut bundle = Bundle::new();
        bundle.insert(Artifact::chunk(
            "bundle-[sourcehash].js",
            "export const hash = '__SOURCEHASH__';",
        ));
        bundle
    }

    #[test]
    fn test_default_pipeline_rewrites_code_and_name() {
        let mut plugin = SourceHash::new(Settings::default());
        plugin.build_start();
        plugin.transform("const answer = 42;");

        let mut bundle = chunk_bundle();
        plugin
            .generate_bundle(&OutputOptions::default(), &mut bundle)
            .unwrap();

        let artifact = bundle.get("bundle-[sourcehash].js").unwrap();
        let digest = plugin.session().digest().unwrap().to_string();

        assert_eq!(digest.len(), 6);
        assert_eq!(artifact.file_name, format!("bundle-{digest}.js"));
        assert_eq!(
            artifact.code.as_deref(),
            Some(format!("export const hash = '{digest}';").as_str())
        );
    }

    #[test]
    fn test_empty_placeholders_disable_substitution() {
        let settings = Settings {
            code_placeholder: Some(String::new()),
            file_placeholder: None,
            ..Settings::default()
        };

        let mut plugin = SourceHash::new(settings);
        plugin.transform("const answer = 42;");

        let mut bundle = chunk_bundle();
        plugin
            .generate_bundle(&OutputOptions::default(), &mut bundle)
            .unwrap();

        let artifact = bundle.get("bundle-[sourcehash].js").unwrap();
        assert_eq!(artifact.file_name, "bundle-[sourcehash].js");
        assert_eq!(
            artifact.code.as_deref(),
            Some("export const hash = '__SOURCEHASH__';")
        );
    }

    #[test]
    fn test_unknown_algorithm_aborts_the_pass() {
        let settings = Settings {
            hash_args: HashArgs::Algorithm("not-a-hash".to_string()),
            ..Settings::default()
        };

        let mut plugin = SourceHash::new(settings);
        plugin.transform("const answer = 42;");

        let result = plugin.generate_bundle(&OutputOptions::default(), &mut chunk_bundle());
        assert!(result.is_err());
    }

    #[test]
    fn test_close_bundle_resets_session() {
        let mut plugin = SourceHash::new(Settings::default());
        plugin.transform("const answer = 42;");
        plugin
            .generate_bundle(&OutputOptions::default(), &mut chunk_bundle())
            .unwrap();

        plugin.close_bundle();

        assert!(plugin.session().is_empty());
        assert_eq!(plugin.session().digest(), None);
    }

    #[test]
    fn test_build_start_discards_aborted_residue() {
        let mut plugin = SourceHash::new(Settings::default());

        // An aborted pass observes sources but never reaches teardown.
        plugin.build_start();
        plugin.transform("leftover from aborted build");

        plugin.build_start();
        plugin.transform("const answer = 42;");

        assert_eq!(plugin.session().source(), "const answer = 42;\n");
    }
}
