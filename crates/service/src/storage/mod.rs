//! Local key-value substrates for the blob-backed word store.
//!
//! A [`BlobStore`] behaves like a browser's local storage: string keys, string
//! values, and a `set` that replaces the whole value in one step.

pub mod file_blob_store;
pub mod memory_blob_store;

use async_trait::async_trait;
use thiserror::Error;

pub use file_blob_store::FileBlobStore;
pub use memory_blob_store::MemoryBlobStore;

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("invalid blob key {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// String-keyed store of whole values.
///
/// `set` must be atomic from a reader's point of view: a concurrent or later
/// `get` sees either the previous value or the new one, never a mix.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Value under `key`; `None` if the key was never set or has been removed.
    async fn get(&self, key: &str) -> Result<Option<String>, BlobError>;
    /// Replace the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), BlobError>;
    /// Remove `key`. Removing an absent key succeeds.
    async fn remove(&self, key: &str) -> Result<(), BlobError>;
}
