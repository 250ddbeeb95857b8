//! Core domain types for the Ladle package registry.
//!
//! This crate provides:
//! - Identifier validation for owners, repository names, revisions, and
//!   content hashes
//! - Toolchain normalization into canonical `origin:version` form
//! - Storage key derivation for artifacts, barrels, and raw build outputs
//! - Build matching against a package's build history
//!
//! Everything here is pure: no I/O, no shared state. Values are constructed
//! from untrusted request input and discarded once a response is produced.

pub mod build;
pub mod config;
pub mod error;
pub mod ident;
pub mod keys;
pub mod toolchain;

pub use build::{Build, BuildFilter, match_build};
pub use error::{Error, Result};
pub use keys::{Namespace, StorageKey};
pub use toolchain::Toolchain;
