//! # Elliptic-Curve Diffie-Hellman (secp256k1)
//!
//! The shared secret is the x-coordinate of `a·B`. It is never used as a
//! cipher key directly: [`SharedSecret::derive_cipher_key`] runs it through
//! HKDF-SHA256 first.

use crate::keys::{SecretKey, XOnlyPublicKey};
use crate::symmetric::CipherKey;
use crate::CryptoError;
use sha2::Sha256;
use subtle::ConstantTimeEq;

/// Transient ECDH output. Zeroized on drop by the underlying k256 type.
pub struct SharedSecret(k256::ecdh::SharedSecret);

impl SharedSecret {
    /// Raw x-coordinate bytes (32 bytes).
    pub fn as_bytes(&self) -> &[u8] {
        self.0.raw_secret_bytes().as_slice()
    }

    /// Derive a 256-bit cipher key with HKDF-SHA256.
    pub fn derive_cipher_key(&self, salt: &[u8], info: &[u8]) -> Result<CipherKey, CryptoError> {
        let mut okm = [0u8; 32];
        self.0
            .extract::<Sha256>(Some(salt))
            .expand(info, &mut okm)
            .map_err(|_| CryptoError::KeyDerivationFailed)?;
        Ok(CipherKey::from_bytes(okm))
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for SharedSecret {}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Compute the shared secret between our scalar and a peer's x-only key.
///
/// The peer key was already validated as a curve point when the
/// `XOnlyPublicKey` was built; it is re-lifted here so a forged value can
/// never reach the scalar multiplication.
pub fn derive_shared_secret(
    secret: &SecretKey,
    peer: &XOnlyPublicKey,
) -> Result<SharedSecret, CryptoError> {
    let secret = secret.to_k256()?;
    let peer_point = peer.to_k256()?;

    let shared = k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer_point.as_affine());
    Ok(SharedSecret(shared))
}
