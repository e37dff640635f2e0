//! Shared test fixtures.

use nip07_signer::{InMemoryBlobStore, KeyStore, RelayDirectory, SigningProvider, UnsignedEvent};
use shared_crypto::SecretKey;

/// Provider over a fresh in-memory store.
pub fn memory_provider() -> SigningProvider<InMemoryBlobStore> {
    SigningProvider::new(
        KeyStore::with_default_slot(InMemoryBlobStore::new()),
        RelayDirectory::default(),
    )
}

/// Provider whose store already holds `secret`.
pub fn provider_with_key(secret: &SecretKey) -> SigningProvider<InMemoryBlobStore> {
    let store = InMemoryBlobStore::with_value(nip07_signer::DEFAULT_STORAGE_KEY, secret.to_hex());
    SigningProvider::new(KeyStore::with_default_slot(store), RelayDirectory::default())
}

/// `{kind:1, content:"hello", created_at:1700000000, tags:[]}`
pub fn hello_event() -> UnsignedEvent {
    UnsignedEvent::new(1_700_000_000, 1, vec![], "hello")
}
