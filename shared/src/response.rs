//! Response envelope contract
//!
//! The federation backend wraps payloads inconsistently: `{"news": [...]}`,
//! `{"member": {...}}`, `{"data": [...]}`, `{"results": [...]}` or a bare
//! array, and signals auth conditions through sentinel `message` strings
//! instead of status codes. This module normalizes all of that in one place:
//! each endpoint declares its expected keys and calls [`extract_collection`]
//! or [`extract_record`]; sentinel detection lives on [`ApiBody`].

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Sentinel message signaling that the bearer token was not recognized.
/// Triggers one refresh-and-retry cycle in the client.
pub const MSG_TOKEN_NOT_FOUND: &str = "token not found";

/// Sentinel message signaling that the backend rotated the token. The new
/// token rides along in the body and the original request is retried once.
pub const MSG_TOKEN_REFRESHED: &str = "token refreshed";

/// Envelope error type
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// No array payload found under any expected key
    #[error("no collection found in response body")]
    MissingCollection,

    /// No record payload found under any expected key
    #[error("no record found in response body")]
    MissingRecord,

    /// Payload found but failed to decode into the target type
    #[error("failed to decode payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Parsed JSON body of a backend response, plus the HTTP status it came with
#[derive(Debug, Clone)]
pub struct ApiBody {
    pub status: u16,
    pub value: Value,
}

impl ApiBody {
    pub fn new(status: u16, value: Value) -> Self {
        Self { status, value }
    }

    /// The backend's `message` field, when present
    pub fn message(&self) -> Option<&str> {
        self.value.get("message").and_then(Value::as_str)
    }

    /// True when the body carries the token-not-found sentinel
    pub fn is_token_missing(&self) -> bool {
        self.message()
            .is_some_and(|m| m.to_ascii_lowercase().contains(MSG_TOKEN_NOT_FOUND))
    }

    /// The token carried by the body, at `token` or `data.token`
    pub fn token(&self) -> Option<&str> {
        self.value
            .get("token")
            .and_then(Value::as_str)
            .or_else(|| {
                self.value
                    .get("data")
                    .and_then(|d| d.get("token"))
                    .and_then(Value::as_str)
            })
    }

    /// The rotated token, when the body carries the token-refreshed sentinel
    pub fn refreshed_token(&self) -> Option<&str> {
        let refreshed = self
            .message()
            .is_some_and(|m| m.to_ascii_lowercase().contains(MSG_TOKEN_REFRESHED));
        if !refreshed {
            return None;
        }
        self.token()
    }

    /// Server-provided failure message, falling back to a generic one
    pub fn error_message(&self) -> String {
        self.message()
            .map(str::to_string)
            .unwrap_or_else(|| format!("request failed with status {}", self.status))
    }
}

/// Normalizes a collection response. Tries the endpoint's named keys in order,
/// then a bare top-level array, then the first array-valued property of the
/// object (the backend has shipped all three shapes).
pub fn extract_collection<T: DeserializeOwned>(
    value: &Value,
    keys: &[&str],
) -> Result<Vec<T>, EnvelopeError> {
    for key in keys {
        if let Some(array) = value.get(key).filter(|v| v.is_array()) {
            return Ok(serde_json::from_value(array.clone())?);
        }
    }

    if value.is_array() {
        return Ok(serde_json::from_value(value.clone())?);
    }

    if let Some(object) = value.as_object() {
        if let Some(array) = object.values().find(|v| v.is_array()) {
            return Ok(serde_json::from_value(array.clone())?);
        }
    }

    Err(EnvelopeError::MissingCollection)
}

/// Normalizes a single-record response. Tries the endpoint's named keys, then
/// the body itself.
pub fn extract_record<T: DeserializeOwned>(
    value: &Value,
    keys: &[&str],
) -> Result<T, EnvelopeError> {
    for key in keys {
        if let Some(record) = value.get(key).filter(|v| v.is_object()) {
            return Ok(serde_json::from_value(record.clone())?);
        }
    }

    if value.is_object() {
        return Ok(serde_json::from_value(value.clone())?);
    }

    Err(EnvelopeError::MissingRecord)
}
