//! # Symmetric Encryption
//!
//! XChaCha20-Poly1305 authenticated encryption.
//!
//! ## Security Properties
//!
//! - 192-bit random nonce per message, so random generation never collides
//!   in practice under one key
//! - Poly1305 tag: any modified byte fails decryption; no partial plaintext is
//!   ever returned
//! - Constant-time ARX design

use crate::random::fill_random;
use crate::CryptoError;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Nonce length for XChaCha20-Poly1305.
pub const NONCE_LEN: usize = 24;

/// Cipher key (256-bit).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CipherKey([u8; 32]);

impl CipherKey {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// Nonce for encryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Nonce([u8; NONCE_LEN]);

impl Nonce {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; NONCE_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from an untrusted slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: [u8; NONCE_LEN] = bytes.try_into().map_err(|_| CryptoError::InvalidNonceLength {
            expected: NONCE_LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(array))
    }

    /// Generate random nonce.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut bytes = [0u8; NONCE_LEN];
        fill_random(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_LEN] {
        &self.0
    }
}

/// Encrypt plaintext with XChaCha20-Poly1305 under a fresh nonce.
///
/// Returns (ciphertext || tag, nonce).
///
/// # Errors
///
/// - `CryptoError::EntropyUnavailable` if no nonce could be drawn
/// - `CryptoError::EncryptionFailed` if encryption fails
pub fn encrypt(key: &CipherKey, plaintext: &[u8]) -> Result<(Vec<u8>, Nonce), CryptoError> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = Nonce::generate()?;

    let ciphertext = cipher
        .encrypt(XNonce::from_slice(nonce.as_bytes()), plaintext)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    Ok((ciphertext, nonce))
}

/// Decrypt ciphertext with XChaCha20-Poly1305.
///
/// # Errors
///
/// Returns `CryptoError::DecryptionFailed` if the tag does not verify.
pub fn decrypt(key: &CipherKey, ciphertext: &[u8], nonce: &Nonce) -> Result<Vec<u8>, CryptoError> {
    let cipher = XChaCha20Poly1305::new(key.as_bytes().into());

    cipher
        .decrypt(XNonce::from_slice(nonce.as_bytes()), ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}
