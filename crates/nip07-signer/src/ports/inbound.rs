//! # Inbound Ports (Driving Ports / API)
//!
//! The NIP-07 capability surface a host application consumes
//! (`window.nostr` in a browser).

use crate::domain::errors::SignerError;
use crate::domain::event::{SignedEvent, UnsignedEvent};
use crate::domain::relays::RelayDirectory;
use async_trait::async_trait;

/// Primary signing provider API.
///
/// Every call loads the identity from storage; no other state is carried
/// across calls. Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait Nip07Api: Send + Sync {
    /// Lowercase hex x-only public key of the stored identity, generating
    /// and persisting a new identity on first use.
    async fn get_public_key(&self) -> Result<String, SignerError>;

    /// Sign `event`, returning a copy with `pubkey`, `id` and `sig` set.
    ///
    /// # Errors
    /// * `SignerError::Validation` - malformed event
    /// * `SignerError::Storage` - identity could not be loaded
    async fn sign_event(&self, event: UnsignedEvent) -> Result<SignedEvent, SignerError>;

    /// Static relay directory (pass-through).
    async fn get_relays(&self) -> RelayDirectory;

    /// Encrypt `plaintext` to `peer_pubkey_hex`.
    ///
    /// # Errors
    /// * `SignerError::InvalidKey` - peer key is not a curve point
    async fn nip04_encrypt(
        &self,
        peer_pubkey_hex: &str,
        plaintext: &str,
    ) -> Result<String, SignerError>;

    /// Decrypt a payload received from `peer_pubkey_hex`.
    ///
    /// # Errors
    /// * `SignerError::Decryption` - malformed payload or failed authentication
    async fn nip04_decrypt(
        &self,
        peer_pubkey_hex: &str,
        payload: &str,
    ) -> Result<String, SignerError>;
}
