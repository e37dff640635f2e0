//! # Shared Crypto - secp256k1 Identity Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keys` | secp256k1 scalars, x-only points | Identity |
//! | `schnorr` | BIP-340 | Event signatures |
//! | `ecdh` | secp256k1 ECDH + HKDF-SHA256 | Pairwise key agreement |
//! | `symmetric` | XChaCha20-Poly1305 | Message encryption |
//! | `hashing` | SHA-256 | Event ids |
//!
//! ## Security Properties
//!
//! - **Keys**: rejection-sampled from `OsRng`, zeroized on drop
//! - **BIP-340**: deterministic (zero aux randomness), x-only public keys
//! - **ECDH**: peer keys validated as curve points, output never used raw
//! - **XChaCha20**: 192-bit random nonce per message, authenticated

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdh;
pub mod errors;
pub mod hashing;
pub mod keys;
pub mod random;
pub mod schnorr;
pub mod symmetric;

// Re-exports
pub use ecdh::{derive_shared_secret, SharedSecret};
pub use errors::CryptoError;
pub use hashing::{sha256, Hash};
pub use keys::{derive_public_key, SecretKey, XOnlyPublicKey};
pub use schnorr::{sign_prehash, verify_prehash, SchnorrSignature};
pub use symmetric::{decrypt, encrypt, CipherKey, Nonce, NONCE_LEN};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
