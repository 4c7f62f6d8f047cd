use ledger::{
    Block,
    Configuration,
    NodeStatus,
    Round,
};
use reqwest::{
    header::{
        HeaderName,
        HeaderValue,
    },
    Url,
};
use serde::de::DeserializeOwned;
use std::fmt;

use crate::{
    ClientError,
    ClientResult,
};

/// Header carrying the node's own auth token, sent only when a token is set
pub const TOKEN_HEADER: &str = "X-Algo-API-Token";

/// HTTP client for the algod v1 REST API.
///
/// Every request carries the token header (if any) followed by the
/// configured headers, in the order they were configured.
#[derive(Clone)]
pub struct NodeClient {
    address: String,
    headers: Vec<(HeaderName, HeaderValue)>,
    http: reqwest::Client,
}

// Header values hold credentials, keep them out of logs
impl fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeClient")
            .field("address", &self.address)
            .field("headers", &self.headers.len())
            .finish()
    }
}

impl NodeClient {
    pub fn new(config: &Configuration) -> ClientResult<Self> {
        let address = config.address().trim();

        let url = Url::parse(address)
            .map_err(|e| ClientError::Configuration(format!("invalid address {:?}: {}", address, e)))?;

        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "invalid address {:?}: expected an http(s) URL",
                address
            )));
        }

        let mut headers = Vec::with_capacity(config.headers().len() + 1);

        if !config.token().is_empty() {
            headers.push(parse_header(TOKEN_HEADER, config.token())?);
        }

        for header in config.headers() {
            headers.push(parse_header(&header.key, &header.value)?);
        }

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Ok(Self {
            address: address.trim_end_matches('/').to_string(),
            headers,
            http,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /*
     * Current sync state of the node
     */
    pub async fn status(&self) -> ClientResult<NodeStatus> {
        self.get("/v1/status").await
    }

    /*
     * Block finalized at the given round, with its transactions
     */
    pub async fn block(&self, round: Round) -> ClientResult<Block> {
        self.get(&format!("/v1/block/{}", round)).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{}", self.address, path);

        tracing::debug!("(Client) GET {}", url);

        let request = self
            .headers
            .iter()
            .fold(self.http.get(&url), |request, (key, value)| {
                request.header(key.clone(), value.clone())
            });

        let res = request.send().await.map_err(|e| {
            tracing::warn!("(Client) GET {} failed: {}", url, e);
            ClientError::Network(e)
        })?;

        let status = res.status();
        let body = res.bytes().await?;

        if !status.is_success() {
            tracing::warn!("(Client) GET {} answered {}", url, status);
            return Err(ClientError::Remote {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|e| ClientError::Remote {
            status: status.as_u16(),
            message: format!("malformed response: {}", e),
        })
    }
}

fn parse_header(key: &str, value: &str) -> ClientResult<(HeaderName, HeaderValue)> {
    let name = HeaderName::from_bytes(key.as_bytes())
        .map_err(|_| ClientError::Configuration(format!("invalid header name {:?}", key)))?;
    let value = HeaderValue::from_str(value)
        .map_err(|_| ClientError::Configuration(format!("invalid value for header {:?}", key)))?;
    Ok((name, value))
}

/// Nodes answer errors either as `{"message": ...}` or as plain text
fn error_message(body: &[u8]) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(err) => err.message,
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}
