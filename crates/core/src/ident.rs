//! Identifier validation for untrusted path and query strings.
//!
//! Every public function here takes a raw string and either returns the
//! normalized value or fails with a field-level [`Error`]. Hex-length checks
//! are exact-length, character-set checks are anchored over the whole string,
//! and only literal ASCII ranges are accepted (no Unicode look-alikes).

use crate::error::{Error, Result};

/// Maximum length of a package owner (GitHub user/org rules).
pub const MAX_OWNER_LEN: usize = 39;

/// Maximum length of a package repository name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a platform triple.
pub const MAX_PLATFORM_LEN: usize = 100;

/// Exact hex length of a git revision.
pub const REVISION_HEX_LEN: usize = 40;

/// Exact hex length of an artifact hash.
pub const ARTIFACT_HEX_LEN: usize = 16;

/// Exact hex length of a barrel hash.
pub const BARREL_HEX_LEN: usize = 64;

fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip a known file extension from `value`.
///
/// If the input contains a `.`, the substring after the last `.` must equal
/// `ext` exactly; any mismatch is a fatal validation error, not a silent
/// pass-through. Inputs without a `.` pass through unchanged, so callers may
/// supply either a bare identifier or a full filename.
pub fn trim_ext<'a>(ext: &str, value: &'a str) -> Result<&'a str> {
    match value.rfind('.') {
        None => Ok(value),
        Some(dot) => {
            let actual = &value[dot + 1..];
            if actual == ext {
                Ok(&value[..dot])
            } else {
                Err(Error::InvalidExtension(format!(
                    "expected file extension to be '{ext}', got '{actual}'"
                )))
            }
        }
    }
}

/// Validate a package owner: non-empty, ASCII alphanumeric or hyphen,
/// at most [`MAX_OWNER_LEN`] characters.
pub fn validate_owner(owner: &str) -> Result<&str> {
    if owner.is_empty() {
        return Err(Error::InvalidOwner("must be non-empty".into()));
    }
    if owner.len() > MAX_OWNER_LEN {
        return Err(Error::InvalidOwner(format!(
            "must be at most {MAX_OWNER_LEN} characters"
        )));
    }
    if !owner
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    {
        return Err(Error::InvalidOwner(
            "may only contain alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(owner)
}

/// Validate a package repository name: non-empty, ASCII alphanumeric,
/// underscore, dot, or hyphen, at most [`MAX_NAME_LEN`] characters, and not
/// a reserved relative-path token (`.`, `..`) or a `.git` name.
pub fn validate_name(name: &str) -> Result<&str> {
    if name.is_empty() {
        return Err(Error::InvalidName("must be non-empty".into()));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(Error::InvalidName(format!(
            "must be at most {MAX_NAME_LEN} characters"
        )));
    }
    if name == "." || name == ".." {
        return Err(Error::InvalidName(format!("'{name}' is reserved")));
    }
    if name.ends_with(".git") {
        return Err(Error::InvalidName("must not end in '.git'".into()));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'.' | b'-'))
    {
        return Err(Error::InvalidName(
            "may only contain alphanumeric characters, underscores, dots, and hyphens".into(),
        ));
    }
    Ok(name)
}

/// Validate a git revision: exactly 40 hex digits, case-insensitive.
pub fn validate_revision(rev: &str) -> Result<&str> {
    if rev.len() != REVISION_HEX_LEN || !is_hex(rev) {
        return Err(Error::InvalidRevision(format!(
            "expected exactly {REVISION_HEX_LEN} hexits"
        )));
    }
    Ok(rev)
}

/// Validate an artifact name: exactly 16 hex digits, optionally supplied
/// with a `.art` suffix which is stripped. Case is preserved.
pub fn validate_artifact(file: &str) -> Result<&str> {
    let hash = trim_ext("art", file).map_err(|e| Error::InvalidArtifact(e.to_string()))?;
    if hash.len() != ARTIFACT_HEX_LEN || !is_hex(hash) {
        return Err(Error::InvalidArtifact(format!(
            "expected exactly {ARTIFACT_HEX_LEN} hexits"
        )));
    }
    Ok(hash)
}

/// Validate a barrel name: exactly 64 hex digits, optionally supplied with
/// a `.barrel` suffix which is stripped.
pub fn validate_barrel(file: &str) -> Result<&str> {
    let hash = trim_ext("barrel", file).map_err(|e| Error::InvalidBarrel(e.to_string()))?;
    if hash.len() != BARREL_HEX_LEN || !is_hex(hash) {
        return Err(Error::InvalidBarrel(format!(
            "expected exactly {BARREL_HEX_LEN} hexits"
        )));
    }
    Ok(hash)
}

/// Validate a platform triple: at most [`MAX_PLATFORM_LEN`] characters of
/// ASCII alphanumeric, underscore, or hyphen. The empty string means
/// "unspecified" and normalizes to `None`, never to an empty value.
pub fn validate_platform(platform: &str) -> Result<Option<&str>> {
    if platform.is_empty() {
        return Ok(None);
    }
    if platform.len() > MAX_PLATFORM_LEN {
        return Err(Error::InvalidPlatform(format!(
            "must be at most {MAX_PLATFORM_LEN} characters"
        )));
    }
    if !platform
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-'))
    {
        return Err(Error::InvalidPlatform(
            "may only contain alphanumeric characters, underscores, and hyphens".into(),
        ));
    }
    Ok(Some(platform))
}
