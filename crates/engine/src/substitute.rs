//! Placeholder substitution
//!
//! Rewrites every artifact in the bundle, replacing the configured code
//! and file-name placeholders with the digest. Replacement is literal
//! substring replacement; placeholders are never interpreted as
//! patterns.

use tracing::debug;

use crate::bundle::Bundle;

/// Replace placeholder occurrences in every artifact's code body and
/// file name
///
/// Every non-overlapping occurrence is replaced; zero occurrences is not
/// an error. Disabled placeholders (`None`) skip the corresponding
/// rewrite. Each artifact is rewritten independently, so iteration order
/// cannot affect the outcome.
pub fn apply(
    bundle: &mut Bundle,
    digest: &str,
    code_placeholder: Option<&str>,
    file_placeholder: Option<&str>,
) {
    for artifact in bundle.values_mut() {
        if let (Some(placeholder), Some(code)) = (code_placeholder, artifact.code.as_mut()) {
            if code.contains(placeholder) {
                *code = code.replace(placeholder, digest);
            }
        }

        if let Some(placeholder) = file_placeholder {
            if artifact.file_name.contains(placeholder) {
                let renamed = artifact.file_name.replace(placeholder, digest);
                debug!("Renaming {} -> {renamed}", artifact.file_name);
                artifact.file_name = renamed;
            }
        }
    }
}
