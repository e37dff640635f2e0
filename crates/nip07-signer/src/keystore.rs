//! # Key Store
//!
//! Owns the identity's private key on top of a [`BlobStore`] slot.
//!
//! ## Invariants
//!
//! - The first `load()` against an empty slot writes it exactly once
//! - Load-or-generate runs under a single-flight guard, and the write itself
//!   is `put_if_absent`, so concurrent writers converge on one key
//! - Storage failures surface as `StorageError`; nothing is retried

use crate::domain::errors::{SignerError, StorageError};
use crate::ports::outbound::BlobStore;
use shared_crypto::SecretKey;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// Default storage slot, matching the browser extension convention.
pub const DEFAULT_STORAGE_KEY: &str = "nostr:privkey";

/// Private key custody over a blob store slot.
pub struct KeyStore<S: BlobStore> {
    store: S,
    slot: String,
    single_flight: Mutex<()>,
}

impl<S: BlobStore> KeyStore<S> {
    /// Key store using `slot` in `store`.
    pub fn new(store: S, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
            single_flight: Mutex::new(()),
        }
    }

    /// Key store using [`DEFAULT_STORAGE_KEY`].
    pub fn with_default_slot(store: S) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    /// Underlying storage.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a key is stored. No side effects.
    pub async fn has(&self) -> Result<bool, SignerError> {
        Ok(self.store.has(&self.slot).await?)
    }

    /// Return the stored key, generating and persisting one if absent.
    ///
    /// # Errors
    ///
    /// - `SignerError::Storage` if the medium fails or holds an undecodable key
    /// - `SignerError::Entropy` if a new key cannot be generated
    pub async fn load(&self) -> Result<SecretKey, SignerError> {
        if let Some(stored) = self.store.get(&self.slot).await? {
            return self.decode(Zeroizing::new(stored));
        }

        let _flight = self.single_flight.lock().await;

        // Another task may have generated while we waited on the guard.
        if let Some(stored) = self.store.get(&self.slot).await? {
            debug!(slot = %self.slot, "Key generated by concurrent caller");
            return self.decode(Zeroizing::new(stored));
        }

        let key = SecretKey::generate()?;
        let encoded = Zeroizing::new(key.to_hex());

        match self.store.put_if_absent(&self.slot, &encoded).await? {
            None => {
                info!(
                    slot = %self.slot,
                    pubkey = %key.public_key()?,
                    "Generated and persisted new identity"
                );
                Ok(key)
            }
            Some(existing) => {
                warn!(slot = %self.slot, "Lost key generation race; adopting stored key");
                self.decode(Zeroizing::new(existing))
            }
        }
    }

    fn decode(&self, stored: Zeroizing<String>) -> Result<SecretKey, SignerError> {
        SecretKey::from_hex(&stored).map_err(|_| {
            SignerError::Storage(StorageError::Corrupt {
                key: self.slot.clone(),
            })
        })
    }
}
