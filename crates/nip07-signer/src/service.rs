//! # Signing Provider Service
//!
//! Application service layer that implements the `Nip07Api` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`Nip07Api`)
//! - Uses the outbound port (`BlobStore`, through `KeyStore`) for the identity
//! - Delegates all cryptography to the domain layer
//!
//! Each call loads the key, uses it, and drops it (zeroizing the copy).

use crate::config::SignerConfig;
use crate::domain::errors::SignerError;
use crate::domain::event::{SignedEvent, UnsignedEvent};
use crate::domain::pairwise::{self, EncryptedPayload};
use crate::domain::relays::RelayDirectory;
use crate::domain::signer;
use crate::keystore::KeyStore;
use crate::ports::inbound::Nip07Api;
use crate::ports::outbound::BlobStore;
use async_trait::async_trait;
use shared_crypto::XOnlyPublicKey;
use tracing::{debug, warn};

/// NIP-07 signing provider over a key store and a static relay directory.
pub struct SigningProvider<S: BlobStore> {
    keystore: KeyStore<S>,
    relays: RelayDirectory,
}

impl<S: BlobStore> SigningProvider<S> {
    /// Create a provider.
    ///
    /// # Arguments
    /// * `keystore` - custody of the identity's private key
    /// * `relays` - directory returned verbatim by `get_relays`
    pub fn new(keystore: KeyStore<S>, relays: RelayDirectory) -> Self {
        Self { keystore, relays }
    }

    /// Create a provider from configuration.
    pub fn from_config(store: S, config: &SignerConfig) -> Self {
        Self::new(
            KeyStore::new(store, config.storage_key.clone()),
            config.relays.clone(),
        )
    }

    /// Underlying key store.
    pub fn keystore(&self) -> &KeyStore<S> {
        &self.keystore
    }

    /// Typed public key of the stored identity.
    pub async fn public_key(&self) -> Result<XOnlyPublicKey, SignerError> {
        let secret = self.keystore.load().await?;
        Ok(secret.public_key()?)
    }

    /// Validate host JSON and sign it.
    pub async fn sign_event_json(
        &self,
        event: &serde_json::Value,
    ) -> Result<SignedEvent, SignerError> {
        let event = UnsignedEvent::from_json(event)?;
        self.sign_event(event).await
    }

    /// Verify a signed event. Does not touch storage.
    pub fn verify_event(&self, event: &SignedEvent) -> Result<(), SignerError> {
        signer::verify_event(event)
    }
}

#[async_trait]
impl<S: BlobStore> Nip07Api for SigningProvider<S> {
    async fn get_public_key(&self) -> Result<String, SignerError> {
        Ok(self.public_key().await?.to_hex())
    }

    async fn sign_event(&self, event: UnsignedEvent) -> Result<SignedEvent, SignerError> {
        let secret = self.keystore.load().await?;
        let signed = signer::sign_event(&event, &secret)?;

        if let Some(hint) = event.pubkey.as_deref() {
            if !hint.eq_ignore_ascii_case(&signed.pubkey) {
                warn!(
                    supplied = %hint,
                    actual = %signed.pubkey,
                    "Event pubkey replaced with signer identity"
                );
            }
        }

        debug!(id = %signed.id, kind = signed.kind, "Signed event");
        Ok(signed)
    }

    async fn get_relays(&self) -> RelayDirectory {
        self.relays.clone()
    }

    async fn nip04_encrypt(
        &self,
        peer_pubkey_hex: &str,
        plaintext: &str,
    ) -> Result<String, SignerError> {
        let peer = XOnlyPublicKey::from_hex(peer_pubkey_hex)?;
        let secret = self.keystore.load().await?;

        let shared = pairwise::shared_secret(&secret, &peer)?;
        let payload = pairwise::encrypt(&shared, plaintext)?;

        debug!(peer = %peer, bytes = plaintext.len(), "Encrypted message");
        Ok(payload.to_string())
    }

    async fn nip04_decrypt(
        &self,
        peer_pubkey_hex: &str,
        payload: &str,
    ) -> Result<String, SignerError> {
        let peer = XOnlyPublicKey::from_hex(peer_pubkey_hex)?;
        let payload: EncryptedPayload = payload.parse()?;
        let secret = self.keystore.load().await?;

        let shared = pairwise::shared_secret(&secret, &peer)?;
        pairwise::decrypt(&shared, &payload)
    }
}
