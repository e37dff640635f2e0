//! # Signer Errors
//!
//! Error taxonomy for the signing provider.
//!
//! ## Design Principles
//!
//! - Every failure surfaces to the caller; nothing is retried internally
//! - Decryption failures carry no cause (no padding/tag oracle)
//! - Messages never include key material

use shared_crypto::CryptoError;
use thiserror::Error;

/// Failures of the persistent blob store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The storage medium cannot be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// A slot holds a value that cannot be decoded.
    #[error("Corrupt value in storage slot '{key}'")]
    Corrupt { key: String },

    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(String),
}

/// Malformed event input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The event is not a JSON object.
    #[error("Event must be a JSON object")]
    NotAnObject,

    /// A required field is absent (or null).
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present with the wrong type or range.
    #[error("Invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Host request could not be interpreted.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors returned by every provider operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignerError {
    /// Persistence unavailable or corrupt.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Out-of-range scalar or a value that is not a curve point.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Malformed event or request.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication, format or encoding failure while decrypting.
    #[error("Decryption failed")]
    Decryption,

    /// Encryption or key derivation failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// The OS RNG is unavailable. Fatal.
    #[error("Entropy unavailable: {0}")]
    Entropy(String),

    /// A signed event does not verify.
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl SignerError {
    /// Stable machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            SignerError::Storage(_) => "StorageError",
            SignerError::InvalidKey(_) => "InvalidKeyError",
            SignerError::Validation(_) => "ValidationError",
            SignerError::Decryption => "DecryptionError",
            SignerError::Encryption(_) => "EncryptionError",
            SignerError::Entropy(_) => "EntropyError",
            SignerError::VerificationFailed(_) => "VerificationError",
        }
    }
}

impl From<CryptoError> for SignerError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidPrivateKey | CryptoError::InvalidPublicKey => {
                SignerError::InvalidKey(err.to_string())
            }
            CryptoError::DecryptionFailed | CryptoError::InvalidNonceLength { .. } => {
                SignerError::Decryption
            }
            CryptoError::EntropyUnavailable(reason) => SignerError::Entropy(reason),
            CryptoError::SignatureVerificationFailed | CryptoError::InvalidSignatureFormat => {
                SignerError::VerificationFailed(err.to_string())
            }
            CryptoError::EncryptionFailed(_) | CryptoError::KeyDerivationFailed => {
                SignerError::Encryption(err.to_string())
            }
        }
    }
}
