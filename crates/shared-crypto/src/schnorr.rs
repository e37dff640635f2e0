//! # BIP-340 Schnorr Signatures (secp256k1)
//!
//! Event ids are signed as 32-byte prehashed messages.
//!
//! ## Security Properties
//!
//! - All-zero auxiliary randomness: identical (key, digest) pairs yield
//!   identical signatures, so no RNG is consulted while signing
//! - Nonce derivation is tagged-hash based per BIP-340, never reused across
//!   distinct digests

use crate::hashing::Hash;
use crate::keys::{SecretKey, XOnlyPublicKey};
use crate::CryptoError;
use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::schnorr::Signature;
use std::fmt;

/// Schnorr signature (64 bytes, R.x || s).
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SchnorrSignature([u8; 64]);

impl SchnorrSignature {
    /// Create from bytes (64 bytes).
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Parse a 128-character hex signature.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 64];
        hex::decode_to_slice(hex_str.trim(), &mut bytes)
            .map_err(|_| CryptoError::InvalidSignatureFormat)?;
        Ok(Self(bytes))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SchnorrSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SchnorrSignature({})", self.to_hex())
    }
}

/// Sign a 32-byte digest.
pub fn sign_prehash(secret: &SecretKey, digest: &Hash) -> Result<SchnorrSignature, CryptoError> {
    let signing_key = secret.signing_key()?;
    let sig: Signature = signing_key
        .sign_prehash(digest)
        .map_err(|_| CryptoError::InvalidPrivateKey)?;
    Ok(SchnorrSignature(sig.to_bytes()))
}

/// Verify a signature over a 32-byte digest.
///
/// # Errors
///
/// - `CryptoError::InvalidSignatureFormat` if `r` or `s` is out of range
/// - `CryptoError::SignatureVerificationFailed` if the equation does not hold
pub fn verify_prehash(
    public_key: &XOnlyPublicKey,
    digest: &Hash,
    signature: &SchnorrSignature,
) -> Result<(), CryptoError> {
    let verifying_key = public_key.verifying_key()?;
    let sig = Signature::try_from(&signature.0[..])
        .map_err(|_| CryptoError::InvalidSignatureFormat)?;

    verifying_key
        .verify_prehash(digest, &sig)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}
