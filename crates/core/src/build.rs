//! Package build history and the build-matching algorithm.

use crate::error::Result;
use crate::toolchain::Toolchain;
use serde::{Deserialize, Serialize};

/// An entry in a package's build history (index schema 1.1.0).
///
/// Field names match the JSON index. An absent or empty `archiveHash` means
/// no retrievable archive exists for that build.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    /// Full commit hash the build was made from.
    pub revision: String,
    /// Normalized toolchain the build used.
    pub toolchain: String,
    /// Barrel hash of the uploaded archive, if one was produced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_hash: Option<String>,
    /// Size of the uploaded archive in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_size: Option<u64>,
    /// Whether the package built successfully.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub built: Option<bool>,
    /// Whether the package's tests passed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tested: Option<bool>,
    /// Whether a `lake update` was required to build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_update: Option<bool>,
    /// UTC timestamp of the build run.
    #[serde(default)]
    pub run_at: Option<String>,
    /// Link to the CI run that produced this build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Build {
    /// The archive hash, if this build produced a retrievable archive.
    pub fn archive_hash(&self) -> Option<&str> {
        self.archive_hash.as_deref().filter(|h| !h.is_empty())
    }
}

/// Optional revision/toolchain filters for build matching.
#[derive(Clone, Debug, Default)]
pub struct BuildFilter {
    /// Exact revision the build must have been made from.
    pub revision: Option<String>,
    /// Normalized toolchain the build must have used.
    pub toolchain: Option<Toolchain>,
}

impl BuildFilter {
    /// Build a filter from raw request strings, normalizing the toolchain.
    pub fn new(revision: Option<String>, toolchain: Option<&str>) -> Result<Self> {
        let toolchain = match toolchain {
            Some(raw) => Toolchain::normalize(raw)?,
            None => None,
        };
        Ok(Self { revision, toolchain })
    }
}

/// Select the build whose archive should be served.
///
/// Scans `builds` in list order and returns the first build that has a
/// non-empty archive hash and satisfies both filters; a build's toolchain is
/// normalized before comparison so either spelling matches. Returns `None`
/// if no build is eligible.
///
/// Precondition: the index stores builds most-recent-first, so first-match
/// encodes "most recent build that satisfies the filter". No secondary
/// recency scoring is applied here.
pub fn match_build<'a>(builds: &'a [Build], filter: &BuildFilter) -> Option<&'a Build> {
    builds.iter().find(|build| {
        if build.archive_hash().is_none() {
            return false;
        }
        if let Some(rev) = &filter.revision
            && build.revision != *rev
        {
            return false;
        }
        if let Some(toolchain) = &filter.toolchain {
            // A build whose recorded toolchain fails to normalize can never
            // match a filtered request.
            match Toolchain::normalize(&build.toolchain) {
                Ok(Some(build_toolchain)) => {
                    if build_toolchain != *toolchain {
                        return false;
                    }
                }
                _ => return false,
            }
        }
        true
    })
}
