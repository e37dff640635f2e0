//! # Domain Layer
//!
//! Pure cryptographic and validation logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod canonical;
pub mod errors;
pub mod event;
pub mod pairwise;
pub mod relays;
pub mod signer;
