//! # Canonical Serialization
//!
//! The event id commits to these exact bytes:
//!
//! ```text
//! [0,"<pubkey>",<created_at>,<kind>,<tags>,"<content>"]
//! ```
//!
//! - Compact JSON, no whitespace between tokens
//! - Strings are raw UTF-8 except `"` `\` and control characters; LF, CR,
//!   TAB, BS and FF use their short escapes, other `U+0000..U+001F` become
//!   `\u00xx`. `/` and non-ASCII are never escaped.
//!
//! These are exactly the rules `serde_json`'s compact writer applies, so the
//! array is emitted through it as a tuple.

use super::errors::{SignerError, ValidationError};
use super::event::UnsignedEvent;
use shared_crypto::{sha256, Hash, XOnlyPublicKey};

/// Serialize the signable fields of `event` for `pubkey`.
pub fn canonical_bytes(
    pubkey: &XOnlyPublicKey,
    event: &UnsignedEvent,
) -> Result<Vec<u8>, SignerError> {
    let fields = (
        0u8,
        pubkey.to_hex(),
        event.created_at,
        event.kind,
        &event.tags,
        &event.content,
    );

    serde_json::to_vec(&fields).map_err(|e| {
        SignerError::Validation(ValidationError::InvalidField {
            field: "event",
            reason: e.to_string(),
        })
    })
}

/// `SHA-256(canonical_bytes)`.
pub fn event_id(pubkey: &XOnlyPublicKey, event: &UnsignedEvent) -> Result<Hash, SignerError> {
    Ok(sha256(&canonical_bytes(pubkey, event)?))
}
