//! Plugin settings
//!
//! Options are merged from defaults and caller overrides once, at plugin
//! construction, and are immutable afterwards. Field names are snake_case
//! with camelCase aliases so the options deserialize from host configs
//! written in either convention.

use serde::{Deserialize, Serialize};

/// Default placeholder replaced inside emitted code bodies
pub const DEFAULT_CODE_PLACEHOLDER: &str = "__SOURCEHASH__";

/// Default placeholder replaced inside emitted file names
pub const DEFAULT_FILE_PLACEHOLDER: &str = "[sourcehash]";

/// Default digest output length in bytes
const DEFAULT_OUTPUT_LENGTH: usize = 3;

/// Plugin configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Automatically delete outdated builds from the output directory
    #[serde(alias = "autoDelete")]
    pub auto_delete: bool,

    /// Placeholder replaced in code bodies; `None` or empty disables
    /// code substitution
    #[serde(alias = "codePlaceholder")]
    pub code_placeholder: Option<String>,

    /// Placeholder replaced in file names; `None` or empty disables
    /// file-name substitution and stale-build cleanup
    #[serde(alias = "filePlaceholder")]
    pub file_placeholder: Option<String>,

    /// Digest algorithm and options
    #[serde(alias = "hashArgs")]
    pub hash_args: HashArgs,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_delete: true,
            code_placeholder: Some(DEFAULT_CODE_PLACEHOLDER.to_string()),
            file_placeholder: Some(DEFAULT_FILE_PLACEHOLDER.to_string()),
            hash_args: HashArgs::default(),
        }
    }
}

impl Settings {
    /// Code placeholder, with empty strings treated as disabled
    pub fn code_placeholder(&self) -> Option<&str> {
        self.code_placeholder.as_deref().filter(|p| !p.is_empty())
    }

    /// File placeholder, with empty strings treated as disabled
    pub fn file_placeholder(&self) -> Option<&str> {
        self.file_placeholder.as_deref().filter(|p| !p.is_empty())
    }
}

/// Digest algorithm selection: a bare algorithm name, or a name paired
/// with algorithm options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HashArgs {
    /// Algorithm name with default options
    Algorithm(String),

    /// Algorithm name plus options, e.g. the output length for
    /// extendable-output algorithms
    WithOptions(String, HashOptions),
}

impl HashArgs {
    /// The algorithm name
    pub fn algorithm(&self) -> &str {
        match self {
            HashArgs::Algorithm(name) | HashArgs::WithOptions(name, _) => name,
        }
    }

    /// The algorithm options, if any were supplied
    pub fn options(&self) -> Option<&HashOptions> {
        match self {
            HashArgs::Algorithm(_) => None,
            HashArgs::WithOptions(_, options) => Some(options),
        }
    }
}

impl Default for HashArgs {
    fn default() -> Self {
        HashArgs::WithOptions(
            "shake256".to_string(),
            HashOptions {
                output_length: Some(DEFAULT_OUTPUT_LENGTH),
            },
        )
    }
}

/// Options forwarded to the digest primitive
///
/// Fixed-output algorithms ignore these.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashOptions {
    /// Output length in bytes for extendable-output algorithms
    #[serde(alias = "outputLength")]
    pub output_length: Option<usize>,
}
