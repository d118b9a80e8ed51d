use serde_json::Value;
use std::fmt;

/// Raw failure payload reported by a wallet provider or a contract call.
///
/// Providers report failures in a handful of shapes. The shape is classified once, where the
/// failure crosses the wallet boundary, so that consumers can match on it instead of probing
/// optional fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorPayload {
    /// An error object wrapping another error object, `{ message, error: { message } }`.
    ///
    /// This is how JSON-RPC nodes relay contract reverts: the inner message is usually of the
    /// form `execution reverted: <reason>`.
    Nested {
        /// Message of the wrapped error.
        inner: String,
        /// Top-level message, if any.
        outer: Option<String>,
    },
    /// A flat error carrying a single message, `{ message }`.
    Message(String),
    /// Anything else.
    Opaque,
}

impl ErrorPayload {
    /// Creates a flat payload from a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Creates the payload a node reports when a contract call reverts with `reason`.
    pub fn revert(reason: &str) -> Self {
        Self::Nested { inner: format!("execution reverted: {reason}"), outer: None }
    }

    /// Classifies an arbitrary JSON error value.
    pub fn from_json(value: &Value) -> Self {
        let outer = value.get("message").and_then(Value::as_str).map(str::to_string);
        if let Some(inner) =
            value.get("error").and_then(|error| error.get("message")).and_then(Value::as_str)
        {
            return Self::Nested { inner: inner.to_string(), outer };
        }
        match outer {
            Some(message) => Self::Message(message),
            None => Self::Opaque,
        }
    }
}

impl fmt::Display for ErrorPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested { inner, .. } => f.write_str(inner),
            Self::Message(message) => f.write_str(message),
            Self::Opaque => f.write_str("unknown error"),
        }
    }
}

/// Errors produced at the wallet provider boundary.
#[derive(Clone, Debug, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet provider detected")]
    Unavailable,
    #[error("no account connected")]
    NoAccount,
    #[error("wallet rejected the request: {0}")]
    Rejected(ErrorPayload),
    #[error("wallet request failed: {0}")]
    Request(ErrorPayload),
    #[error("invalid wallet provider url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl WalletError {
    /// Shorthand for a failed request carrying a flat message.
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(ErrorPayload::message(message))
    }

    /// Returns the raw payload, if this error carries one.
    pub fn payload(&self) -> Option<&ErrorPayload> {
        match self {
            Self::Rejected(payload) | Self::Request(payload) => Some(payload),
            _ => None,
        }
    }
}
