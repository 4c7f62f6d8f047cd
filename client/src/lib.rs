mod error;
mod node_client;

use async_trait::async_trait;
use ledger::{
    Block,
    NodeStatus,
    Round,
};

pub use error::{
    ClientError,
    ErrorKind,
};
pub use node_client::{
    NodeClient,
    TOKEN_HEADER,
};

pub type ClientResult<T> = Result<T, ClientError>;

/// What a reporter needs from a node, whatever serves it
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn status(&self) -> ClientResult<NodeStatus>;
    async fn block(&self, round: Round) -> ClientResult<Block>;
}

#[async_trait]
impl LedgerApi for NodeClient {
    async fn status(&self) -> ClientResult<NodeStatus> {
        NodeClient::status(self).await
    }

    async fn block(&self, round: Round) -> ClientResult<Block> {
        NodeClient::block(self, round).await
    }
}
