//! JSON-RPC 1.0 wire format: request payload construction and the response
//! resolution shared by every typed method.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, ServerError};

/// A request payload: exactly `method`, `params`, `id`.
///
/// The node speaks JSON-RPC 1.0; no `jsonrpc` version key is sent. Params
/// are positional and order-significant, and `id` is the caller's
/// correlation string, passed through unchanged.
#[derive(Debug, Serialize)]
pub(crate) struct Request<'a> {
    pub(crate) method: &'a str,
    pub(crate) params: &'a [Value],
    pub(crate) id: &'a str,
}

#[derive(Debug, Deserialize)]
struct Response {
    result: Option<Value>,
    error: Option<Value>,
}

/// Resolve a raw response body into the single allowed outcome.
///
/// A body that does not decode as a JSON-RPC object is a `Parse` failure,
/// a non-null `error` field wins over any `result`, and a missing or null
/// `result` is a valid `Ok(Value::Null)`.
pub(crate) fn interpret(body: &str) -> Result<Value, Error> {
    let response: Response = serde_json::from_str(body).map_err(|e| Error::Parse {
        reason: format!("decode JSON-RPC response: {e}; body={body}"),
    })?;

    match response.error {
        Some(error) if signals_error(&error) => Err(Error::Server(ServerError::new(error))),
        _ => Ok(response.result.unwrap_or(Value::Null)),
    }
}

// The node sends `"error": null` on success rather than omitting the field;
// an empty object likewise carries no error information.
fn signals_error(error: &Value) -> bool {
    match error {
        Value::Null => false,
        Value::Object(fields) => !fields.is_empty(),
        _ => true,
    }
}
