//! Storage key derivation.
//!
//! Object keys are an ordered list of path segments rooted at a namespace
//! prefix that selects production vs dev storage, followed by scope
//! segments, optional filter segments, and a final extension-qualified
//! identifier. Scope segments are inserted verbatim: callers validate and
//! percent-decode upstream, the builder only assembles.

use crate::toolchain::Toolchain;
use std::fmt;

/// Entity kind stored under a namespace prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    /// Individual compiled outputs, addressed by 16-hexit hash (`.art`).
    Artifact,
    /// Compressed build archives, addressed by 64-hexit hash (`.barrel`).
    Barrel,
    /// Raw build-output logs, addressed by revision (`.jsonl`).
    Output,
}

impl Namespace {
    /// Namespace prefix for this entity kind, chosen solely by the dev flag.
    pub fn prefix(self, dev: bool) -> &'static str {
        match (self, dev) {
            (Self::Artifact, true) => "a0",
            (Self::Artifact, false) => "a1",
            (Self::Barrel, true) => "dev",
            (Self::Barrel, false) => "b1",
            (Self::Output, true) => "r0",
            (Self::Output, false) => "r1",
        }
    }

    /// File extension of the final key segment.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Artifact => "art",
            Self::Barrel => "barrel",
            Self::Output => "jsonl",
        }
    }

    /// Content type served for objects of this kind.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Artifact => "application/octet-stream",
            Self::Barrel => "application/vnd.reservoir.barrel+gzip",
            Self::Output => "application/jsonl; charset=utf-8",
        }
    }
}

/// A fully derived object-storage key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKey {
    kind: Namespace,
    segments: Vec<String>,
}

impl StorageKey {
    /// Artifact key: `{a0|a1}/{scope...}/{hash}.art`.
    pub fn artifact(dev: bool, owner: &str, repo: &str, hash: &str) -> Self {
        Self::build(Namespace::Artifact, dev, [owner, repo], hash, None, None)
    }

    /// Barrel key: `{dev|b1}/{hash}.barrel`. Barrels are content-addressed
    /// globally, so there is no scope.
    pub fn barrel(dev: bool, hash: &str) -> Self {
        Self::build(Namespace::Barrel, dev, [], hash, None, None)
    }

    /// Raw build-output key:
    /// `{r0|r1}/{scope...}[/pt/{platform}][/tc/{toolchain-dir}]/{rev}.jsonl`.
    pub fn output(
        dev: bool,
        owner: &str,
        repo: &str,
        rev: &str,
        platform: Option<&str>,
        toolchain: Option<&Toolchain>,
    ) -> Self {
        Self::build(
            Namespace::Output,
            dev,
            [owner, repo],
            rev,
            platform,
            toolchain,
        )
    }

    fn build<'a>(
        kind: Namespace,
        dev: bool,
        scope: impl IntoIterator<Item = &'a str>,
        id: &str,
        platform: Option<&str>,
        toolchain: Option<&Toolchain>,
    ) -> Self {
        let mut segments = vec![kind.prefix(dev).to_string()];
        segments.extend(scope.into_iter().map(str::to_string));
        // Optional filter segments in fixed order: platform before toolchain.
        if let Some(platform) = platform {
            segments.push("pt".to_string());
            segments.push(platform.to_string());
        }
        if let Some(toolchain) = toolchain {
            segments.push("tc".to_string());
            segments.push(toolchain.dir_encode());
        }
        segments.push(format!("{id}.{}", kind.extension()));
        Self { kind, segments }
    }

    /// The entity kind this key addresses.
    pub fn kind(&self) -> Namespace {
        self.kind
    }

    /// The final filename segment (for `Content-Disposition`).
    pub fn filename(&self) -> &str {
        self.segments
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
