//! Error types for sourcehash-engine

use thiserror::Error;

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the sourcehash engine
#[derive(Error, Debug)]
pub enum Error {
    /// Requested digest algorithm is not available
    #[error("Unsupported hash algorithm: {algorithm}")]
    UnsupportedAlgorithm {
        /// The algorithm name that failed to resolve
        algorithm: String,
    },

    /// Reconstructed stale-file pattern failed to compile
    #[error("Invalid stale-file pattern '{pattern}': {source}")]
    Pattern {
        /// The pattern that failed to compile
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Filesystem error from the system capability
    #[error(transparent)]
    System(#[from] sourcehash_core::Error),
}
