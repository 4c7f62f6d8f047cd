use argh::FromArgs;
use ledger::{
    Block,
    NodeStatus,
    Round,
    Transaction,
};
use stub_node::{
    NodeState,
    StubNode,
};
use tracing_subscriber::EnvFilter;

/// Serve a canned algod node for local runs of the reporter
#[derive(Debug, FromArgs)]
struct Args {
    /// address to listen on
    #[argh(option, default = "String::from(\"127.0.0.1:8080\")")]
    listen: String,

    /// require this X-API-Key on every request
    #[argh(option)]
    api_key: Option<String>,

    /// round of the served block
    #[argh(option, default = "2729005")]
    round: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Args = argh::from_env();

    let status = NodeStatus {
        last_round: Round(args.round + 5),
        time_since_last_round: 1_500_000_000,
        catchup_time: 0,
        last_version: "v1.0".to_string(),
        ..NodeStatus::default()
    };

    let block = Block::new(
        args.round,
        vec![
            Transaction::with_note("hello"),
            Transaction::with_note(""),
            Transaction::with_note("world"),
        ],
    );

    let mut state = NodeState::new().with_status(status).with_block(block);
    if let Some(key) = &args.api_key {
        state = state.with_api_key(key);
    }

    let node = StubNode::bind(state, args.listen.parse()?).await?;

    println!("Stub node listening on {}", node.address());

    tokio::signal::ctrl_c().await?;

    Ok(())
}
