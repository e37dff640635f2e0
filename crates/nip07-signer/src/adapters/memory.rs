//! In-memory storage adapters for tests and ephemeral identities.

use crate::domain::errors::StorageError;
use crate::ports::outbound::BlobStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory blob store.
///
/// `put_if_absent` is atomic under the write lock. Counts successful writes
/// so tests can assert how often the medium was mutated.
#[derive(Default)]
pub struct InMemoryBlobStore {
    data: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate one slot.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.data.write().insert(key.into(), value.into());
        store
    }

    /// Number of writes performed through the `BlobStore` interface.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.data.write().insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> Result<Option<String>, StorageError> {
        let mut data = self.data.write();
        if let Some(existing) = data.get(key) {
            return Ok(Some(existing.clone()));
        }
        data.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

/// Store whose medium is always unreachable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBlobStore;

#[async_trait]
impl BlobStore for UnavailableBlobStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage offline".to_string()))
    }

    async fn put_if_absent(&self, _key: &str, _value: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage offline".to_string()))
    }
}
