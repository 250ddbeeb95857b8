//! Toolchain normalization.
//!
//! Toolchains arrive as free-form user/CI strings (`4.9.0`,
//! `nightly-2024-01-01`, `leanprover/lean4:v4.9.0`, ...) and double as both
//! a build-history filter and a storage-path component. Normalization is
//! deterministic so that equal toolchains compare equal after normalizing
//! either side, and restrictive enough that the directory encoding can never
//! smuggle a path separator into a storage key.

use crate::error::{Error, Result};
use std::fmt;

/// Canonical origin for bare toolchain versions.
pub const DEFAULT_ORIGIN: &str = "leanprover/lean4";

/// Origin for PR-release toolchains (`pr-release-<n>` tags).
pub const PR_RELEASE_ORIGIN: &str = "leanprover/lean4-pr-releases";

/// Maximum length of a normalized toolchain string.
pub const MAX_TOOLCHAIN_LEN: usize = 256;

/// A normalized toolchain in `<origin>:<version>` form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Toolchain(String);

impl Toolchain {
    /// Normalize a raw toolchain string.
    ///
    /// Returns `None` for the empty string (a toolchain was not specified,
    /// which is distinct from any valid toolchain). Otherwise:
    ///
    /// 1. Split on the first `:`. Without a `:`, the whole string is the
    ///    version; bare versions starting with `pr-release` map to
    ///    [`PR_RELEASE_ORIGIN`], everything else to [`DEFAULT_ORIGIN`].
    /// 2. Versions whose first character is a digit are prefixed with `v`
    ///    (`4.9.0` becomes `v4.9.0`); others pass through unchanged.
    /// 3. Reassemble as `origin:version` and enforce the restricted
    ///    character set (`[A-Za-z0-9_:/.-]`) and maximum length. Violations
    ///    are fatal, never lossy truncation.
    ///
    /// Normalization is idempotent: normalizing an already-normalized
    /// toolchain yields the same value.
    pub fn normalize(raw: &str) -> Result<Option<Self>> {
        if raw.is_empty() {
            return Ok(None);
        }
        let (origin, version) = match raw.split_once(':') {
            Some((origin, version)) => (origin, version),
            None if raw.starts_with("pr-release") => (PR_RELEASE_ORIGIN, raw),
            None => (DEFAULT_ORIGIN, raw),
        };
        let version = match version.chars().next() {
            Some(c) if c.is_ascii_digit() => format!("v{version}"),
            _ => version.to_string(),
        };
        let normalized = format!("{origin}:{version}");
        if normalized.len() > MAX_TOOLCHAIN_LEN {
            return Err(Error::InvalidToolchain(format!(
                "must be at most {MAX_TOOLCHAIN_LEN} characters"
            )));
        }
        if !normalized
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b':' | b'/' | b'.' | b'-'))
        {
            return Err(Error::InvalidToolchain(
                "may only contain alphanumeric characters and '_:/.-'".into(),
            ));
        }
        Ok(Some(Self(normalized)))
    }

    /// The normalized `origin:version` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encode the toolchain as a single filesystem-safe path segment.
    ///
    /// Replaces `/` with `--` and `:` with `---`. This is one-way: it is
    /// used only when constructing storage paths and never reversed at
    /// runtime.
    pub fn dir_encode(&self) -> String {
        self.0.replace('/', "--").replace(':', "---")
    }
}

impl fmt::Display for Toolchain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str) -> String {
        Toolchain::normalize(raw)
            .unwrap()
            .expect("toolchain should be present")
            .as_str()
            .to_string()
    }

    #[test]
    fn bare_numeric_version_gets_default_origin_and_v_prefix() {
        assert_eq!(normalize("4.9.0"), "leanprover/lean4:v4.9.0");
    }

    #[test]
    fn bare_named_version_passes_through() {
        assert_eq!(
            normalize("nightly-2024-01-01"),
            "leanprover/lean4:nightly-2024-01-01"
        );
    }

    #[test]
    fn pr_release_routes_to_pr_origin() {
        assert_eq!(
            normalize("pr-release-123"),
            "leanprover/lean4-pr-releases:pr-release-123"
        );
        assert_eq!(
            normalize("pr-release"),
            "leanprover/lean4-pr-releases:pr-release"
        );
    }

    #[test]
    fn explicit_origin_is_kept() {
        assert_eq!(normalize("leanprover/lean4:v4.9.0"), "leanprover/lean4:v4.9.0");
        assert_eq!(normalize("other/repo:4.0.0"), "other/repo:v4.0.0");
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "4.9.0",
            "v4.9.0",
            "nightly-2024-01-01",
            "pr-release-123",
            "leanprover/lean4:v4.9.0",
            "other/repo:stable",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn empty_normalizes_to_absent() {
        assert_eq!(Toolchain::normalize("").unwrap(), None);
    }

    #[test]
    fn rejects_disallowed_characters() {
        assert!(Toolchain::normalize("lean 4").is_err());
        assert!(Toolchain::normalize("lean4\u{00e9}").is_err());
    }

    #[test]
    fn rejects_overlong_toolchains() {
        let long = "x".repeat(MAX_TOOLCHAIN_LEN);
        assert!(Toolchain::normalize(&long).is_err());
    }

    #[test]
    fn dir_encoding_replaces_separators() {
        let tc = Toolchain::normalize("4.9.0").unwrap().unwrap();
        assert_eq!(tc.dir_encode(), "leanprover--lean4---v4.9.0");
        assert!(!tc.dir_encode().contains('/'));
        assert!(!tc.dir_encode().contains(':'));
    }
}
