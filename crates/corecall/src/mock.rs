//! Recording RPC double for exercising the typed façade without a node.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::CoreRpc;
use crate::error::{Error, ServerError};

#[derive(Debug, Clone)]
pub(crate) struct RecordedCall {
    pub method: String,
    pub params: Vec<Value>,
    pub id: String,
}

/// Implements only `call` and inherits the whole façade, so a test can
/// observe exactly what each wrapper would put on the wire.
pub(crate) struct MockRpc {
    outcome: Result<Value, Value>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockRpc {
    /// Every call succeeds with the given result value.
    pub fn returning(result: Value) -> Self {
        Self {
            outcome: Ok(result),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with the given server error payload.
    pub fn erroring(payload: Value) -> Self {
        Self {
            outcome: Err(payload),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }

    /// The one call a single-wrapper test is expected to have made.
    pub fn single_call(&self) -> RecordedCall {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one recorded call");
        calls.into_iter().next().expect("one call is present")
    }
}

#[async_trait]
impl CoreRpc for MockRpc {
    async fn call(&self, method: &str, params: Vec<Value>, id: &str) -> Result<Value, Error> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                method: method.to_owned(),
                params,
                id: id.to_owned(),
            });
        match &self.outcome {
            Ok(result) => Ok(result.clone()),
            Err(payload) => Err(Error::Server(ServerError::new(payload.clone()))),
        }
    }
}
