//! # Nostr Signer Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── integration/   # Capability surface scenarios across crates
//! ├── properties/    # proptest invariants (ECDH, AEAD, signing)
//! └── exploits/      # Attack simulations (invalid curve, tampering, forgery)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p signer-tests
//!
//! # By category
//! cargo test -p signer-tests integration::
//! cargo test -p signer-tests properties::
//! cargo test -p signer-tests exploits::
//! ```

#![allow(dead_code)]

pub mod exploits;
pub mod fixtures;
pub mod properties;
