//! # Sourcehash Engine
//!
//! Build-pipeline hook that stamps emitted bundles with a hash of the
//! source code that produced them.
//!
//! The engine accumulates every piece of source text the host build tool
//! hands it during a pass, hashes the accumulated text once the output
//! set is known, and then:
//!
//! - replaces a literal placeholder in emitted code bodies with the hash
//! - replaces a literal placeholder in emitted file names with the hash
//! - optionally deletes previously emitted files whose names carry a
//!   stale hash
//!
//! # Example
//!
//! ```
//! use sourcehash_engine::{Artifact, Bundle, OutputOptions, Settings, SourceHash};
//!
//! # fn main() -> sourcehash_engine::Result<()> {
//! let mut plugin = SourceHash::new(Settings::default());
//!
//! plugin.build_start();
//! plugin.transform("const answer = 42;");
//!
//! let mut bundle = Bundle::new();
//! bundle.insert(Artifact::chunk(
//!     "bundle-[sourcehash].js",
//!     "export const hash = '__SOURCEHASH__';",
//! ));
//!
//! plugin.generate_bundle(&OutputOptions::default(), &mut bundle)?;
//! plugin.close_bundle();
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod digest;
pub mod error;
pub mod plugin;
pub mod reap;
pub mod session;
pub mod settings;
pub mod substitute;

// Re-export the filesystem capability from core
pub use sourcehash_core::{DryRunSystem, Operation, RealSystem, System};

pub use bundle::{Artifact, Bundle, OutputOptions};
pub use error::{Error, Result};
pub use plugin::SourceHash;
pub use session::BuildSession;
pub use settings::{HashArgs, HashOptions, Settings};
