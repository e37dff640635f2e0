//! # secp256k1 Identity Keys
//!
//! Secret scalars and BIP-340 x-only public keys.
//!
//! ## Security Properties
//!
//! - Secret scalars are validated to lie in `[1, n-1]` on construction
//! - Secret bytes are zeroized on drop and redacted from `Debug`
//! - Public keys are validated as x-coordinates of curve points (even Y lift)

use crate::random::fill_random;
use crate::CryptoError;
use k256::schnorr::{SigningKey, VerifyingKey};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Rejection sampling bound for key generation.
///
/// A uniformly random 32-byte string falls outside `[1, n-1]` with probability
/// below 2^-127, so hitting this bound means the RNG is broken.
const MAX_GENERATION_ATTEMPTS: usize = 64;

/// secp256k1 secret scalar (32 bytes).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Create from raw scalar bytes (big-endian).
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidPrivateKey` for zero or for values not
    /// below the curve order.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        k256::SecretKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self(bytes))
    }

    /// Parse a 64-character hex scalar.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        let decoded = hex::decode_to_slice(hex_str.trim(), &mut bytes);
        if decoded.is_err() {
            bytes.zeroize();
            return Err(CryptoError::InvalidPrivateKey);
        }
        let result = Self::from_bytes(bytes);
        bytes.zeroize();
        result
    }

    /// Generate a uniformly random scalar by rejection sampling against the
    /// curve order.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::EntropyUnavailable` when the OS RNG fails or
    /// keeps producing out-of-range values.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut candidate = [0u8; 32];
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            fill_random(&mut candidate)?;
            if let Ok(key) = Self::from_bytes(candidate) {
                candidate.zeroize();
                return Ok(key);
            }
        }
        candidate.zeroize();
        Err(CryptoError::EntropyUnavailable(
            "rejection sampling did not produce a valid scalar".to_string(),
        ))
    }

    /// Lowercase hex encoding (storage format).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Derive the x-only public key (scalar multiplication by G).
    pub fn public_key(&self) -> Result<XOnlyPublicKey, CryptoError> {
        let signing_key = self.signing_key()?;
        Ok(XOnlyPublicKey(signing_key.verifying_key().to_bytes().into()))
    }

    pub(crate) fn signing_key(&self) -> Result<SigningKey, CryptoError> {
        SigningKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPrivateKey)
    }

    pub(crate) fn to_k256(&self) -> Result<k256::SecretKey, CryptoError> {
        k256::SecretKey::from_bytes((&self.0).into()).map_err(|_| CryptoError::InvalidPrivateKey)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Derive the public key for raw, externally supplied scalar bytes.
///
/// # Errors
///
/// Returns `CryptoError::InvalidPrivateKey` for zero or out-of-range scalars.
pub fn derive_public_key(secret: &[u8; 32]) -> Result<XOnlyPublicKey, CryptoError> {
    SecretKey::from_bytes(*secret)?.public_key()
}

/// BIP-340 x-only public key (32 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct XOnlyPublicKey([u8; 32]);

impl XOnlyPublicKey {
    /// Create from x-coordinate bytes.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidPublicKey` if `bytes` is not the
    /// x-coordinate of a point on secp256k1.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parse a 64-character hex x-coordinate.
    pub fn from_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(hex_str.trim(), &mut bytes)
            .map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_bytes(bytes)
    }

    /// Get raw x-coordinate bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn verifying_key(&self) -> Result<VerifyingKey, CryptoError> {
        VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// Full curve point with even Y, as used for ECDH.
    pub(crate) fn to_k256(&self) -> Result<k256::PublicKey, CryptoError> {
        let mut sec1 = [0u8; 33];
        sec1[0] = 0x02;
        sec1[1..].copy_from_slice(&self.0);
        k256::PublicKey::from_sec1_bytes(&sec1).map_err(|_| CryptoError::InvalidPublicKey)
    }
}

impl fmt::Debug for XOnlyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "XOnlyPublicKey({})", self.to_hex())
    }
}

impl fmt::Display for XOnlyPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
