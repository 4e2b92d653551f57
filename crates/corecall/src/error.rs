use std::fmt;

use serde_json::Value;

/// Failure of a single RPC call.
///
/// Exactly one of these is produced per call. The variants keep the three
/// outcome kinds distinguishable: `Transport` means no answer was obtained
/// at all, `Server` means the node answered with an error payload, and
/// `Parse` means the node answered with something that is not JSON-RPC.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a response: connection refused,
    /// unreachable host, or a transport-layer timeout.
    #[error("transport failure: {0}")]
    Transport(reqwest::Error),

    /// The response body did not decode as a JSON-RPC object.
    #[error("malformed JSON-RPC response: {reason}")]
    Parse { reason: String },

    /// The server understood the request and reported an error.
    #[error("server error: {0}")]
    Server(ServerError),

    /// Invalid endpoint or credential configuration, rejected before any
    /// network I/O.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// The error payload returned by the node, carried verbatim.
///
/// JSON-RPC convention is `{"code": <int>, "message": <string>}`, but the
/// server may send any JSON value; the accessors return `None` when the
/// conventional fields are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError(Value);

impl ServerError {
    pub(crate) fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// The raw error value exactly as the server sent it.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }

    /// The conventional numeric error code, if present.
    pub fn code(&self) -> Option<i64> {
        self.0.get("code").and_then(Value::as_i64)
    }

    /// The conventional human-readable message, if present.
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "code {code}: {message}"),
            _ => write!(f, "{}", self.0),
        }
    }
}
