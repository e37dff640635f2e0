//! # Event Signing (NIP-01)
//!
//! Pure domain logic: no storage, no I/O.
//!
//! ## Algorithm
//!
//! 1. `pubkey = derive(secret)`
//! 2. `id = SHA-256(canonical_bytes)`
//! 3. `sig = BIP-340(id, secret)` with zero aux randomness
//!
//! Signing the same content twice with the same key yields the same `id` and
//! the same `sig`.

use super::canonical::event_id;
use super::errors::SignerError;
use super::event::{SignedEvent, UnsignedEvent};
use shared_crypto::{sign_prehash, verify_prehash, SchnorrSignature, SecretKey, XOnlyPublicKey};
use subtle::ConstantTimeEq;

/// Sign `event` with `secret`. The input is left untouched.
pub fn sign_event(event: &UnsignedEvent, secret: &SecretKey) -> Result<SignedEvent, SignerError> {
    let pubkey = secret.public_key()?;
    let id = event_id(&pubkey, event)?;
    let sig = sign_prehash(secret, &id)?;

    Ok(SignedEvent {
        id: hex::encode(id),
        pubkey: pubkey.to_hex(),
        created_at: event.created_at,
        kind: event.kind,
        tags: event.tags.clone(),
        content: event.content.clone(),
        sig: sig.to_hex(),
    })
}

/// Verify that `event.id` matches its fields and `event.sig` is a valid
/// signature over it by `event.pubkey`.
///
/// # Errors
///
/// - `SignerError::InvalidKey` if `pubkey` is not a valid x-only key
/// - `SignerError::VerificationFailed` on id mismatch or a bad signature
pub fn verify_event(event: &SignedEvent) -> Result<(), SignerError> {
    let pubkey = XOnlyPublicKey::from_hex(&event.pubkey)?;
    let expected_id = event_id(&pubkey, &event.unsigned())?;

    let mut claimed_id = [0u8; 32];
    hex::decode_to_slice(&event.id, &mut claimed_id)
        .map_err(|_| SignerError::VerificationFailed("malformed id".to_string()))?;

    if !bool::from(claimed_id[..].ct_eq(&expected_id[..])) {
        return Err(SignerError::VerificationFailed(
            "id does not match event fields".to_string(),
        ));
    }

    let sig = SchnorrSignature::from_hex(&event.sig)?;
    verify_prehash(&pubkey, &expected_id, &sig)?;
    Ok(())
}
