//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed.
    ///
    /// Deliberately carries no cause: malformed input, a bad nonce and a tag
    /// mismatch are indistinguishable to the caller.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Invalid nonce length
    #[error("Invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected nonce length in bytes
        expected: usize,
        /// Actual nonce length in bytes
        actual: usize,
    },

    /// Signature verification failed
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// Invalid signature format
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// Public key is not the x-coordinate of a secp256k1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Secret scalar is zero or not below the curve order
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The operating system RNG could not supply bytes
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    /// Key derivation (HKDF) failed
    #[error("Key derivation failed")]
    KeyDerivationFailed,
}
