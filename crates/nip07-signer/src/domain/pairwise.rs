//! # Pairwise Encryption
//!
//! ECDH shared secret → HKDF-SHA256 → XChaCha20-Poly1305 under a fresh
//! 24-byte nonce per message.
//!
//! ## Wire Format
//!
//! ```text
//! base64(ciphertext || tag) "?iv=" base64(nonce)
//! ```
//!
//! Standard alphabet with padding. Every decoding failure collapses into
//! `SignerError::Decryption`.

use super::errors::SignerError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use shared_crypto::{
    decrypt as aead_decrypt, derive_shared_secret, encrypt as aead_encrypt, CipherKey, Nonce,
    SecretKey, SharedSecret, XOnlyPublicKey,
};
use std::fmt;
use std::str::FromStr;

/// HKDF salt for the message key.
pub const KDF_SALT: &[u8] = b"nip04-aead-v1";

/// HKDF info for the message key.
pub const KDF_INFO: &[u8] = b"nostr-signer/xchacha20poly1305";

const IV_SEPARATOR: &str = "?iv=";

/// Ciphertext plus the nonce that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    ciphertext: Vec<u8>,
    nonce: Nonce,
}

impl EncryptedPayload {
    /// Ciphertext including the Poly1305 tag.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Nonce used for this message.
    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }
}

impl fmt::Display for EncryptedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            STANDARD.encode(&self.ciphertext),
            IV_SEPARATOR,
            STANDARD.encode(self.nonce.as_bytes())
        )
    }
}

impl FromStr for EncryptedPayload {
    type Err = SignerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (ct_b64, iv_b64) = s.split_once(IV_SEPARATOR).ok_or(SignerError::Decryption)?;
        let ciphertext = STANDARD
            .decode(ct_b64)
            .map_err(|_| SignerError::Decryption)?;
        let iv = STANDARD.decode(iv_b64).map_err(|_| SignerError::Decryption)?;
        let nonce = Nonce::from_slice(&iv)?;

        Ok(Self { ciphertext, nonce })
    }
}

/// ECDH between our secret and the peer's public key.
pub fn shared_secret(
    secret: &SecretKey,
    peer: &XOnlyPublicKey,
) -> Result<SharedSecret, SignerError> {
    Ok(derive_shared_secret(secret, peer)?)
}

fn message_key(shared: &SharedSecret) -> Result<CipherKey, SignerError> {
    Ok(shared.derive_cipher_key(KDF_SALT, KDF_INFO)?)
}

/// Encrypt `plaintext` for the owner of `shared`.
pub fn encrypt(shared: &SharedSecret, plaintext: &str) -> Result<EncryptedPayload, SignerError> {
    let key = message_key(shared)?;
    let (ciphertext, nonce) = aead_encrypt(&key, plaintext.as_bytes())?;
    Ok(EncryptedPayload { ciphertext, nonce })
}

/// Decrypt `payload`. Returns nothing on any failure.
pub fn decrypt(shared: &SharedSecret, payload: &EncryptedPayload) -> Result<String, SignerError> {
    let key = message_key(shared)?;
    let plaintext = aead_decrypt(&key, &payload.ciphertext, &payload.nonce)?;
    String::from_utf8(plaintext).map_err(|_| SignerError::Decryption)
}
