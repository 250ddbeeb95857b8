//! Storage trait definitions.

use crate::error::StorageResult;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// A boxed stream of bytes for streaming reads.
pub type ByteStream = Pin<Box<dyn Stream<Item = StorageResult<Bytes>> + Send>>;

/// Metadata about a stored object.
#[derive(Clone, Debug)]
pub struct ObjectMeta {
    /// Object size in bytes.
    pub size: u64,
    /// Content type recorded by the backend, if any.
    pub content_type: Option<String>,
}

/// Object store interface.
///
/// The resolution layer only reads; `put` exists so tests and seeding tools
/// can populate a store through the same interface.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Check whether an object exists.
    async fn exists(&self, key: &str) -> StorageResult<bool>;

    /// Fetch object metadata without the body.
    async fn head(&self, key: &str) -> StorageResult<ObjectMeta>;

    /// Fetch an object into memory.
    async fn get(&self, key: &str) -> StorageResult<Bytes>;

    /// Open an object as a byte stream.
    async fn get_stream(&self, key: &str) -> StorageResult<ByteStream>;

    /// Write an object, replacing any existing content.
    async fn put(&self, key: &str, data: Bytes) -> StorageResult<()>;
}
