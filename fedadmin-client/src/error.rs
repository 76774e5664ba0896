//! Client error types

use std::collections::BTreeMap;

use thiserror::Error;

/// Per-field validation messages, keyed by field name
pub type FieldErrors = BTreeMap<String, String>;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure; propagates from the transport unchanged
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Token refresh exhausted its single retry
    #[error("Authentication required")]
    Unauthorized,

    /// Non-2xx response carrying the server's message
    #[error("Request failed: {message}")]
    RequestFailed { message: String },

    /// 404 from the backend; drives the alternate-endpoint fallback
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-side validation failed before any network call
    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),

    /// Response body did not match the expected contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session persistence error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<shared::EnvelopeError> for ClientError {
    fn from(err: shared::EnvelopeError) -> Self {
        ClientError::InvalidResponse(err.to_string())
    }
}

/// Flattens validator output into per-field messages for inline display.
pub fn field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .iter()
        .filter_map(|(field, errs)| {
            let first = errs.first()?;
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| first.code.to_string());
            Some((field.to_string(), message))
        })
        .collect()
}
