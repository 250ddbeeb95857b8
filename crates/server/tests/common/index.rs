//! Stub index client and package fixtures.

use async_trait::async_trait;
use ladle_core::Build;
use ladle_index::{IndexClient, IndexError, IndexResult, Package, PackageSource};
use std::collections::HashMap;

/// Revision of the fixture package's most recent build.
#[allow(dead_code)]
pub const HEAD_REV: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// Revision of the fixture package's older build.
#[allow(dead_code)]
pub const OLD_REV: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

/// Archive hash of the most recent build (64 hexits).
#[allow(dead_code)]
pub fn head_barrel_hash() -> String {
    "1f".repeat(32)
}

/// Archive hash of the older build (64 hexits).
#[allow(dead_code)]
pub fn old_barrel_hash() -> String {
    "2e".repeat(32)
}

#[allow(dead_code)]
pub fn build(rev: &str, toolchain: &str, archive_hash: Option<String>) -> Build {
    Build {
        revision: rev.to_string(),
        toolchain: toolchain.to_string(),
        archive_hash,
        archive_size: Some(1024),
        built: Some(true),
        tested: None,
        required_update: Some(false),
        run_at: Some("2024-06-01T00:00:00Z".to_string()),
        url: None,
    }
}

/// A fixture package with a two-entry build history, most recent first,
/// plus a leading build that produced no archive.
#[allow(dead_code)]
pub fn lean4_package() -> Package {
    let sources = vec![PackageSource {
        kind: Some("git".to_string()),
        host: Some("github".to_string()),
        full_name: Some("LeanProver/Lean4".to_string()),
        git_url: Some("https://github.com/leanprover/lean4.git".to_string()),
        default_branch: Some("master".to_string()),
        extra: serde_json::Map::new(),
    }];
    let builds = vec![
        build(HEAD_REV, "leanprover/lean4:v4.10.0", None),
        build(
            HEAD_REV,
            "leanprover/lean4:v4.9.0",
            Some(head_barrel_hash()),
        ),
        build(OLD_REV, "leanprover/lean4:v4.9.0", Some(old_barrel_hash())),
    ];
    let mut extra = serde_json::Map::new();
    extra.insert("description".to_string(), "The Lean 4 theorem prover".into());
    Package {
        name: "lean4".to_string(),
        owner: "leanprover".to_string(),
        full_name: "leanprover/lean4".to_string(),
        sources,
        builds,
        extra,
    }
}

/// A fixture package with no git-hosted source (no artifact scope).
#[allow(dead_code)]
pub fn scopeless_package() -> Package {
    Package {
        name: "orphan".to_string(),
        owner: "nobody".to_string(),
        full_name: "nobody/orphan".to_string(),
        sources: Vec::new(),
        builds: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

/// In-memory index client for tests.
pub struct StubIndexClient {
    packages: HashMap<(String, String), Package>,
    /// When set, every lookup fails with this upstream status.
    pub fail_status: Option<u16>,
}

impl StubIndexClient {
    #[allow(dead_code)]
    pub fn new(packages: impl IntoIterator<Item = Package>) -> Self {
        let packages = packages
            .into_iter()
            .map(|pkg| {
                (
                    (pkg.owner.to_lowercase(), pkg.name.to_lowercase()),
                    pkg,
                )
            })
            .collect();
        Self {
            packages,
            fail_status: None,
        }
    }

    #[allow(dead_code)]
    pub fn failing(status: u16) -> Self {
        Self {
            packages: HashMap::new(),
            fail_status: Some(status),
        }
    }
}

#[async_trait]
impl IndexClient for StubIndexClient {
    async fn package(&self, owner: &str, name: &str) -> IndexResult<Package> {
        if let Some(status) = self.fail_status {
            return Err(IndexError::Upstream { status });
        }
        self.packages
            .get(&(owner.to_lowercase(), name.to_lowercase()))
            .cloned()
            .ok_or_else(|| IndexError::PackageNotFound {
                owner: owner.to_string(),
                name: name.to_string(),
            })
    }
}
