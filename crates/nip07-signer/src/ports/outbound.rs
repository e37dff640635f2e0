//! # Outbound Ports (Driven Ports)
//!
//! The storage medium the host provides: string-keyed slots holding string
//! values (the private key is kept as hex in one slot).
//!
//! Production: `FileBlobStore` (adapters/file.rs)
//! Testing: `InMemoryBlobStore` (adapters/memory.rs)

use crate::domain::errors::StorageError;
use async_trait::async_trait;
use std::sync::Arc;

/// Abstract string-keyed blob store.
///
/// Implementations must be safe to share between tasks.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Get the value of a slot.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite a slot.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Report whether a slot is populated, without side effects.
    async fn has(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Write `value` only if the slot is empty.
    ///
    /// ## Atomicity Guarantee
    ///
    /// Check and write happen as one step with respect to the medium.
    /// Returns `None` if `value` was stored, or `Some(existing)` if another
    /// writer got there first and nothing was written.
    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>, StorageError>;
}

#[async_trait]
impl<T: BlobStore + ?Sized> BlobStore for Arc<T> {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value).await
    }

    async fn has(&self, key: &str) -> Result<bool, StorageError> {
        (**self).has(key).await
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>, StorageError> {
        (**self).put_if_absent(key, value).await
    }
}
