//! Typed JSON-RPC client for the Bitcoin Core node control interface.
//!
//! One call is one authenticated HTTP POST carrying a JSON-RPC 1.0-style
//! body, resolved into exactly one of three outcomes: the `result` value,
//! the server's `error` payload, or a transport failure. The typed surface
//! lives on the [`CoreRpc`] trait; [`HttpClient`] provides the wire
//! implementation.
//!
//! ```no_run
//! use corecall::{CoreRpc, Endpoint, HttpClient};
//!
//! # async fn demo() -> Result<(), corecall::Error> {
//! let endpoint = Endpoint::default().with_auth("alice", "secret");
//! let rpc = HttpClient::new(endpoint)?;
//! let count = rpc.get_block_count("1").await?;
//! println!("height: {count}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod endpoint;
pub mod error;
mod protocol;

#[cfg(test)]
pub(crate) mod mock;

pub use api::CoreRpc;
pub use client::HttpClient;
pub use endpoint::{Auth, Endpoint, Scheme, DEFAULT_RPC_PORT};
pub use error::{Error, ServerError};
