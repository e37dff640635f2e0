//! OS-backed randomness.
//!
//! All key material and nonces come from `OsRng`. Failures are surfaced, never
//! papered over with a weaker source.

use crate::CryptoError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Fill `buf` from the operating system CSPRNG.
///
/// # Errors
///
/// Returns `CryptoError::EntropyUnavailable` if the OS RNG fails.
pub fn fill_random(buf: &mut [u8]) -> Result<(), CryptoError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| CryptoError::EntropyUnavailable(e.to_string()))
}
