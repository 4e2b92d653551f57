//! End-to-end tests of the HTTP client against an in-process server that
//! answers with canned JSON-RPC bodies.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use corecall::{CoreRpc, Endpoint, Error, HttpClient};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("corecall=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

#[derive(Debug, Clone)]
struct CapturedRequest {
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

struct ServerState {
    canned: String,
    requests: Mutex<Vec<CapturedRequest>>,
}

async fn rpc_handler(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: String,
) -> String {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    state
        .requests
        .lock()
        .expect("captured request log poisoned")
        .push(CapturedRequest {
            authorization: header_value("authorization"),
            content_type: header_value("content-type"),
            body,
        });
    state.canned.clone()
}

/// Spin up a one-route server that records requests and answers every POST
/// with `canned`.
async fn serve(canned: &str) -> (SocketAddr, Arc<ServerState>) {
    let state = Arc::new(ServerState {
        canned: canned.to_owned(),
        requests: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/", post(rpc_handler))
        .with_state(state.clone());
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener must bind");
    let addr = listener.local_addr().expect("test listener has an address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server must run");
    });
    (addr, state)
}

fn single_request(state: &ServerState) -> CapturedRequest {
    let requests = state
        .requests
        .lock()
        .expect("captured request log poisoned");
    assert_eq!(requests.len(), 1, "expected exactly one request on the wire");
    requests[0].clone()
}

#[tokio::test]
async fn round_trip_success_with_basic_auth() {
    init_tracing();
    let (addr, state) = serve(r#"{"result":680000,"error":null,"id":"42"}"#).await;

    let endpoint = Endpoint::new("127.0.0.1", addr.port()).with_auth("alice", "secret");
    let rpc = HttpClient::new(endpoint).expect("client must construct");

    let result = rpc.get_block_count("42").await.expect("call must succeed");
    assert_eq!(result, json!(680000));

    let request = single_request(&state);
    assert_eq!(
        request.body,
        r#"{"method":"getblockcount","params":[],"id":"42"}"#
    );
    assert_eq!(
        request.authorization.as_deref(),
        Some("Basic YWxpY2U6c2VjcmV0")
    );
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn anonymous_client_sends_no_authorization_header() {
    init_tracing();
    let (addr, state) = serve(r#"{"result":[],"error":null,"id":"1"}"#).await;

    let rpc = HttpClient::new(Endpoint::new("127.0.0.1", addr.port()))
        .expect("client must construct");
    rpc.get_chain_tips("1").await.expect("call must succeed");

    let request = single_request(&state);
    assert_eq!(request.authorization, None);
}

#[tokio::test]
async fn server_error_payload_is_returned_verbatim() {
    init_tracing();
    let (addr, _state) =
        serve(r#"{"result":null,"error":{"code":-5,"message":"Block not found"},"id":"7"}"#).await;

    let rpc = HttpClient::new(Endpoint::new("127.0.0.1", addr.port()))
        .expect("client must construct");
    let err = rpc
        .get_block("00000000deadbeef", None, "7")
        .await
        .expect_err("server error must surface");

    match err {
        Error::Server(server) => {
            assert_eq!(server.code(), Some(-5));
            assert_eq!(server.message(), Some("Block not found"));
            assert_eq!(
                server.payload(),
                &json!({"code": -5, "message": "Block not found"})
            );
        }
        other => panic!("expected Server, got {other:?}"),
    }
}

#[tokio::test]
async fn null_result_with_null_error_is_a_valid_success() {
    init_tracing();
    let (addr, _state) = serve(r#"{"result":null,"error":null,"id":"tx"}"#).await;

    let rpc = HttpClient::new(Endpoint::new("127.0.0.1", addr.port()))
        .expect("client must construct");
    let result = rpc
        .get_transaction("unknown", None, "tx")
        .await
        .expect("null result is a success, not an error");
    assert_eq!(result, Value::Null);
}

#[tokio::test]
async fn non_json_body_is_a_parse_failure_not_a_crash() {
    init_tracing();
    let (addr, _state) = serve("<html>502 Bad Gateway</html>").await;

    let rpc = HttpClient::new(Endpoint::new("127.0.0.1", addr.port()))
        .expect("client must construct");
    let err = rpc
        .get_difficulty("d")
        .await
        .expect_err("malformed body must be an explicit failure");
    assert!(matches!(err, Error::Parse { .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_failure() {
    init_tracing();
    // Bind and immediately drop a listener so the port is closed.
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("test listener must bind");
    let port = listener
        .local_addr()
        .expect("test listener has an address")
        .port();
    drop(listener);

    let endpoint = Endpoint::new("127.0.0.1", port)
        .with_connect_timeout(Duration::from_secs(2))
        .with_timeout(Duration::from_secs(2));
    let rpc = HttpClient::new(endpoint).expect("client must construct");

    let err = rpc
        .get_block_hash(0, "genesis")
        .await
        .expect_err("closed port must be a transport failure");
    assert!(matches!(err, Error::Transport(_)));
}
