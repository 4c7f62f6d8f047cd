//! A stand-in algod node.
//!
//! Serves canned `/v1/status` and `/v1/block/{round}` answers over real HTTP
//! and records every request it sees, so callers can check how many calls
//! were made and which headers they carried.

use ledger::{
    Block,
    NodeStatus,
    Round,
    API_KEY_HEADER,
};
use std::{
    collections::HashMap,
    net::{
        SocketAddr,
        TcpListener,
    },
    sync::{
        Arc,
        Mutex,
    },
};
use tokio::sync::oneshot;
use warp::{
    http::{
        header::CONTENT_TYPE,
        HeaderMap,
        HeaderValue,
        Response,
        StatusCode,
    },
    path::FullPath,
    Filter,
};

/// What the stub answers with
#[derive(Clone, Debug, Default)]
pub struct NodeState {
    status: Option<NodeStatus>,
    blocks: HashMap<Round, String>,
    api_key: Option<String>,
}

impl NodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: NodeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_block(self, block: Block) -> Self {
        let round = block.round;
        let body = serde_json::to_string(&block).unwrap_or_default();
        self.with_raw_block(round, &body)
    }

    /// Serve `body` verbatim for the round, even if it is not a valid block
    pub fn with_raw_block(mut self, round: Round, body: &str) -> Self {
        self.blocks.insert(round, body.to_string());
        self
    }

    /// Reject requests that don't carry this exact API key
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    fn respond(&self, path: &str, headers: &HeaderMap) -> Response<String> {
        if let Some(expected) = &self.api_key {
            let authorized = headers
                .get_all(API_KEY_HEADER)
                .iter()
                .any(|value| value.as_bytes() == expected.as_bytes());
            if !authorized {
                return error_reply(StatusCode::UNAUTHORIZED, "invalid API key");
            }
        }

        // Hosted nodes live under a base path, only the API part matters
        let endpoint = path.find("/v1/").map(|at| &path[at..]).unwrap_or(path);

        if endpoint == "/v1/status" {
            return match &self.status {
                Some(status) => match serde_json::to_string(status) {
                    Ok(body) => reply(StatusCode::OK, body),
                    Err(e) => error_reply(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()),
                },
                None => error_reply(StatusCode::SERVICE_UNAVAILABLE, "node is not ready"),
            };
        }

        if let Some(round) = endpoint.strip_prefix("/v1/block/") {
            return match round.parse::<Round>() {
                Ok(round) => match self.blocks.get(&round) {
                    Some(body) => reply(StatusCode::OK, body.clone()),
                    None => error_reply(
                        StatusCode::NOT_FOUND,
                        "failed to retrieve information from the ledger",
                    ),
                },
                Err(_) => error_reply(StatusCode::BAD_REQUEST, "failed to parse the round number"),
            };
        }

        error_reply(StatusCode::NOT_FOUND, "no such endpoint")
    }
}

fn reply(status: StatusCode, body: String) -> Response<String> {
    let mut res = Response::new(body);
    *res.status_mut() = status;
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    res
}

fn error_reply(status: StatusCode, message: &str) -> Response<String> {
    reply(status, serde_json::json!({ "message": message }).to_string())
}

/// A request as the stub received it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub headers: Vec<(String, String)>,
}

impl RecordedRequest {
    fn new(path: &str, headers: &HeaderMap) -> Self {
        let headers = headers
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).to_string(),
                )
            })
            .collect();
        Self {
            path: path.to_string(),
            headers,
        }
    }

    /// Every value sent for the header, in the order it was sent
    pub fn header_values(&self, key: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn api_keys(&self) -> Vec<&str> {
        self.header_values(API_KEY_HEADER)
    }
}

pub struct StubNode {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl StubNode {
    /// Start serving on an ephemeral localhost port
    pub async fn start(state: NodeState) -> Result<Self, warp::Error> {
        Self::bind(state, ([127, 0, 0, 1], 0).into()).await
    }

    pub async fn bind(state: NodeState, addr: SocketAddr) -> Result<Self, warp::Error> {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = Arc::new(state);

        let log = requests.clone();
        let routes = warp::get()
            .and(warp::path::full())
            .and(warp::header::headers_cloned())
            .map(move |path: FullPath, headers: HeaderMap| {
                tracing::debug!("(Stub) GET {}", path.as_str());
                if let Ok(mut log) = log.lock() {
                    log.push(RecordedRequest::new(path.as_str(), &headers));
                }
                state.respond(path.as_str(), &headers)
            });

        let (tx, rx) = oneshot::channel::<()>();

        let (addr, server) = warp::serve(routes).try_bind_with_graceful_shutdown(addr, async {
            rx.await.ok();
        })?;

        tokio::spawn(server);

        tracing::info!("(Stub) Serving on {}", addr);

        Ok(Self {
            addr,
            requests,
            shutdown: Some(tx),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to hand to a client
    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    /// Number of requests whose path ends with `endpoint`, base path ignored
    pub fn calls_to(&self, endpoint: &str) -> usize {
        self.requests()
            .iter()
            .filter(|req| req.path.ends_with(endpoint))
            .count()
    }

    pub fn block_calls(&self) -> usize {
        self.requests()
            .iter()
            .filter(|req| req.path.contains("/v1/block/"))
            .count()
    }
}

impl Drop for StubNode {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            tx.send(()).ok();
        }
    }
}

/// An address nothing is listening on, for exercising connection failures
pub fn closed_address() -> std::io::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}
