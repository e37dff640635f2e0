//! # Events
//!
//! NIP-01 event entities: the unsigned input a host hands over and the
//! signed, immutable result.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A tag: ordered sequence of strings, e.g. `["e", "<event id>"]`.
pub type Tag = Vec<String>;

/// Event fields a host supplies for signing.
///
/// `pubkey` is advisory only: signing always overwrites it with the key
/// derived from the stored identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey: Option<String>,
    pub created_at: u64,
    pub kind: u16,
    pub tags: Vec<Tag>,
    pub content: String,
}

impl UnsignedEvent {
    /// Create an event without a pubkey hint.
    pub fn new(created_at: u64, kind: u16, tags: Vec<Tag>, content: impl Into<String>) -> Self {
        Self {
            pubkey: None,
            created_at,
            kind,
            tags,
            content: content.into(),
        }
    }

    /// Validate loosely typed host input.
    ///
    /// `id` and `sig` are ignored when present. Errors name the first
    /// offending field.
    pub fn from_json(value: &Value) -> Result<Self, ValidationError> {
        let obj = value.as_object().ok_or(ValidationError::NotAnObject)?;

        let pubkey = match obj.get("pubkey") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(invalid("pubkey", "expected a hex string")),
        };

        let created_at = required(obj, "created_at")?
            .as_u64()
            .ok_or_else(|| invalid("created_at", "expected a non-negative integer"))?;

        let kind = required(obj, "kind")?
            .as_u64()
            .and_then(|k| u16::try_from(k).ok())
            .ok_or_else(|| invalid("kind", "expected an integer in 0..=65535"))?;

        let tags = parse_tags(required(obj, "tags")?)?;

        let content = required(obj, "content")?
            .as_str()
            .ok_or_else(|| invalid("content", "expected a string"))?
            .to_string();

        Ok(Self {
            pubkey,
            created_at,
            kind,
            tags,
            content,
        })
    }
}

/// A signed event. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedEvent {
    /// Lowercase hex SHA-256 of the canonical serialization.
    pub id: String,
    /// Lowercase hex x-only public key of the signer.
    pub pubkey: String,
    pub created_at: u64,
    pub kind: u16,
    pub tags: Vec<Tag>,
    pub content: String,
    /// Lowercase hex BIP-340 signature over `id`.
    pub sig: String,
}

impl SignedEvent {
    /// The signable fields, with `pubkey` set to the signer.
    pub fn unsigned(&self) -> UnsignedEvent {
        UnsignedEvent {
            pubkey: Some(self.pubkey.clone()),
            created_at: self.created_at,
            kind: self.kind,
            tags: self.tags.clone(),
            content: self.content.clone(),
        }
    }
}

fn required<'a>(
    obj: &'a Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

fn invalid(field: &'static str, reason: &str) -> ValidationError {
    ValidationError::InvalidField {
        field,
        reason: reason.to_string(),
    }
}

fn parse_tags(value: &Value) -> Result<Vec<Tag>, ValidationError> {
    let outer = value
        .as_array()
        .ok_or_else(|| invalid("tags", "expected an array of arrays"))?;

    outer
        .iter()
        .map(|tag| -> Result<Tag, ValidationError> {
            tag.as_array()
                .ok_or_else(|| invalid("tags", "each tag must be an array"))?
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| invalid("tags", "tag items must be strings"))
                })
                .collect()
        })
        .collect()
}
