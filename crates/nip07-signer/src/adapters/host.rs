//! # Host Request Adapter
//!
//! JSON envelope mirroring the `window.nostr` capability object, so a host
//! process (extension bridge, stdio pipe) can drive any [`Nip07Api`].
//!
//! ```text
//! → {"id": 1, "method": "signEvent", "params": {"kind": 1, ...}}
//! ← {"id": 1, "result": {"id": "...", "sig": "...", ...}}
//! ← {"id": 1, "error": {"kind": "ValidationError", "message": "..."}}
//! ```
//!
//! | Method | Params |
//! |--------|--------|
//! | `getPublicKey` | none |
//! | `signEvent` | the event object |
//! | `getRelays` | none |
//! | `nip04.encrypt` | `{"pubkey", "plaintext"}` |
//! | `nip04.decrypt` | `{"pubkey", "ciphertext"}` |

use crate::domain::errors::{SignerError, ValidationError};
use crate::domain::event::UnsignedEvent;
use crate::ports::inbound::Nip07Api;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

/// Sent when a response cannot be serialized.
const ENCODING_FAILURE: &str =
    r#"{"id":null,"error":{"kind":"EncodingError","message":"response could not be encoded"}}"#;

/// One request from the host.
#[derive(Debug, Clone, Deserialize)]
pub struct HostRequest {
    /// Opaque correlation id echoed back in the response.
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// Error body of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostError {
    pub kind: String,
    pub message: String,
}

/// One response to the host. Exactly one of `result` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostResponse {
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<HostError>,
}

impl HostResponse {
    fn ok(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn err(id: Value, err: &SignerError) -> Self {
        Self {
            id,
            result: None,
            error: Some(HostError {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

/// Route a request to `api`.
pub async fn dispatch<A>(api: &A, request: HostRequest) -> HostResponse
where
    A: Nip07Api + ?Sized,
{
    debug!(method = %request.method, "Host request");
    match route(api, &request.method, &request.params).await {
        Ok(result) => HostResponse::ok(request.id, result),
        Err(err) => HostResponse::err(request.id, &err),
    }
}

/// Parse one JSON line, dispatch it, and serialize the response.
///
/// Lines that are not valid requests get an error response with a null id.
pub async fn dispatch_line<A>(api: &A, line: &str) -> String
where
    A: Nip07Api + ?Sized,
{
    let response = match serde_json::from_str::<HostRequest>(line) {
        Ok(request) => dispatch(api, request).await,
        Err(e) => HostResponse::err(
            Value::Null,
            &SignerError::Validation(ValidationError::InvalidRequest(e.to_string())),
        ),
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        warn!(error = %e, "Response could not be encoded");
        ENCODING_FAILURE.to_string()
    })
}

async fn route<A>(api: &A, method: &str, params: &Value) -> Result<Value, SignerError>
where
    A: Nip07Api + ?Sized,
{
    match method {
        "getPublicKey" => Ok(Value::String(api.get_public_key().await?)),
        "signEvent" => {
            let event = UnsignedEvent::from_json(params)?;
            to_value(api.sign_event(event).await?)
        }
        "getRelays" => to_value(api.get_relays().await),
        "nip04.encrypt" => {
            let pubkey = string_param(params, "pubkey")?;
            let plaintext = string_param(params, "plaintext")?;
            Ok(Value::String(api.nip04_encrypt(pubkey, plaintext).await?))
        }
        "nip04.decrypt" => {
            let pubkey = string_param(params, "pubkey")?;
            let ciphertext = string_param(params, "ciphertext")?;
            Ok(Value::String(api.nip04_decrypt(pubkey, ciphertext).await?))
        }
        other => Err(ValidationError::InvalidRequest(format!("unknown method '{other}'")).into()),
    }
}

fn string_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, SignerError> {
    params.get(name).and_then(Value::as_str).ok_or_else(|| {
        ValidationError::InvalidRequest(format!("missing string param '{name}'")).into()
    })
}

fn to_value<T: Serialize>(value: T) -> Result<Value, SignerError> {
    serde_json::to_value(value)
        .map_err(|e| ValidationError::InvalidRequest(e.to_string()).into())
}
