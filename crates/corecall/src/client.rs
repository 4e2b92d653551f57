//! HTTP transport for the RPC core.

use async_trait::async_trait;
use reqwest::header;
use serde_json::Value;
use tracing::{debug, trace};

use crate::api::CoreRpc;
use crate::endpoint::Endpoint;
use crate::error::Error;
use crate::protocol;

/// JSON-RPC client for a Bitcoin Core compatible node, over HTTP(S).
///
/// Each call is a single POST of one request payload; there are no
/// retries, no batching, and no shared mutable state beyond the underlying
/// connection handle, so a client can be shared across tasks.
#[derive(Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    url: String,
    auth: Option<(String, String)>,
}

impl HttpClient {
    /// Build a client for the given endpoint.
    ///
    /// Invalid configuration (empty host, unreadable cookie file) is
    /// rejected here; no connection is attempted until the first call.
    pub fn new(endpoint: Endpoint) -> Result<Self, Error> {
        if endpoint.host().is_empty() {
            return Err(Error::Config("endpoint host must not be empty".to_owned()));
        }
        let auth = endpoint.auth().resolve()?;
        let url = endpoint.url();

        let http = reqwest::Client::builder()
            .connect_timeout(endpoint.connect_timeout())
            .timeout(endpoint.timeout())
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Ok(Self { http, url, auth })
    }
}

#[async_trait]
impl CoreRpc for HttpClient {
    async fn call(&self, method: &str, params: Vec<Value>, id: &str) -> Result<Value, Error> {
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let request = protocol::Request {
            method,
            params: &params,
            id,
        };

        let mut builder = self
            .http
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request);
        if let Some((ref user, ref pass)) = self.auth {
            builder = builder.basic_auth(user, Some(pass));
        }

        let response = builder.send().await.map_err(Error::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(Error::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        protocol::interpret(&body)
    }
}
