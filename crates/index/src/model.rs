//! Package metadata model (index schema 1.1.0).
//!
//! Only the fields the resolution layer consumes are typed; everything else
//! rides along in `extra` so metadata documents can be served back to
//! clients without dropping fields the index adds in newer schema versions.

use ladle_core::Build;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A package's metadata document.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    /// Display name (case preserved).
    pub name: String,
    /// Owning user or organization (case preserved).
    pub owner: String,
    /// Canonical `owner/name` path.
    pub full_name: String,
    /// Source repositories this package is indexed from.
    #[serde(default)]
    pub sources: Vec<PackageSource>,
    /// Build history, most recent first.
    #[serde(default)]
    pub builds: Vec<Build>,
    /// Remaining document fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Package {
    /// The `owner/repo` scope used as the package's artifact namespace root,
    /// taken from its git-hosted source. Lower-cased, since storage paths
    /// are case-insensitive on the package side.
    pub fn artifact_scope(&self) -> Option<(String, String)> {
        let src = self
            .sources
            .iter()
            .find(|s| s.host.as_deref() == Some("github"))?;
        let full_name = src.full_name.as_deref()?;
        let (owner, repo) = full_name.split_once('/')?;
        Some((owner.to_lowercase(), repo.to_lowercase()))
    }
}

/// A single entry in a package's source list.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSource {
    /// Source type (e.g. "git").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Hosting service (e.g. "github").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Host-side `owner/repo` path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Clone URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_url: Option<String>,
    /// Default branch name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    /// Remaining source fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
