//! # NIP-07 Signing Provider
//!
//! Owns a secp256k1 identity, signs NIP-01 events and performs pairwise
//! encrypted messaging on behalf of a host application.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): canonicalization, signing, pairwise
//!   encryption, validation. No I/O
//! - **Ports Layer** (`ports/`): `Nip07Api` (inbound), `BlobStore` (outbound)
//! - **Key Store** (`keystore.rs`): load-or-generate over a storage slot
//! - **Service Layer** (`service.rs`): `SigningProvider`, the capability facade
//! - **Adapters** (`adapters/`): storage media and host request dispatch
//!
//! ## Control Flow
//!
//! ```text
//! get_public_key()      → KeyStore::load() → derive
//! sign_event(e)         → KeyStore::load() → canonicalize → SHA-256 → BIP-340
//! nip04_encrypt(pk, m)  → KeyStore::load() → ECDH → HKDF → XChaCha20-Poly1305
//! ```
//!
//! ## Security Notes
//!
//! - Private keys never leave `KeyStore`/domain calls and are zeroized on drop
//! - Peer keys are validated as curve points before ECDH
//! - Every encryption draws a fresh 192-bit nonce

pub mod adapters;
pub mod config;
pub mod domain;
pub mod keystore;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::{FileBlobStore, InMemoryBlobStore};
pub use config::{ConfigError, SignerConfig};
pub use domain::canonical::{canonical_bytes, event_id};
pub use domain::errors::{SignerError, StorageError, ValidationError};
pub use domain::event::{SignedEvent, Tag, UnsignedEvent};
pub use domain::pairwise::EncryptedPayload;
pub use domain::relays::{RelayDirectory, RelayPolicy};
pub use domain::signer::{sign_event, verify_event};
pub use keystore::{KeyStore, DEFAULT_STORAGE_KEY};
pub use ports::inbound::Nip07Api;
pub use ports::outbound::BlobStore;
pub use service::SigningProvider;
