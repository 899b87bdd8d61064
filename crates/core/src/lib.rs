//! Core types for the sourcehash build hook
//!
//! This is the foundation crate that the engine builds on. It provides:
//! - Base error types
//! - The filesystem capability used by the stale-build reaper
//!
//! This crate has no dependencies on the engine crate.

pub mod error;
pub mod system;

pub use error::{Error, Result};
pub use system::{DryRunSystem, Operation, RealSystem, System};
