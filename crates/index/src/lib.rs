//! Package index client for the Ladle registry.
//!
//! The index is a static tree of JSON documents generated out-of-band; this
//! crate fetches `{base}/{owner}/{name}/metadata.json` over HTTP and exposes
//! the package model the resolution layer needs (sources and build history).

pub mod client;
pub mod error;
pub mod model;

pub use client::{HttpIndexClient, IndexClient};
pub use error::{IndexError, IndexResult};
pub use model::{Package, PackageSource};
