use ledger::{
    Block,
    NodeStatus,
    Round,
    Transaction,
};
use reporter::{
    run,
    ReportError,
    Settings,
    Step,
    EXIT_CONFIGURATION,
    EXIT_NETWORK,
    EXIT_REMOTE,
};
use stub_node::{
    closed_address,
    NodeState,
    StubNode,
};

const API_KEY: &str = "BRPTQsPHTj2fzEwZpnnap9YA0fk9w39340w4xYx3";

fn status() -> NodeStatus {
    NodeStatus {
        last_round: Round(2729010),
        time_since_last_round: 1500000000,
        catchup_time: 0,
        last_version: "v1.0".to_string(),
        ..NodeStatus::default()
    }
}

fn block(round: u64) -> Block {
    Block::new(
        round,
        vec![
            Transaction::with_note("hello"),
            Transaction::with_note(""),
            Transaction::with_note("world"),
        ],
    )
}

fn settings(node: &StubNode) -> Settings {
    Settings {
        api_key: Some(API_KEY.to_string()),
        ..Settings::new(&node.address())
    }
}

async fn report_lines(settings: &Settings) -> (Vec<String>, Result<(), ReportError>) {
    let mut out: Vec<u8> = Vec::new();
    let res = run(settings, &mut out).await;
    let lines = String::from_utf8_lossy(&out)
        .lines()
        .map(String::from)
        .collect();
    (lines, res)
}

#[tokio::test]
async fn prints_status_and_notes() {
    let node = StubNode::start(NodeState::new().with_status(status()).with_block(block(2729005)))
        .await
        .unwrap();

    let (lines, res) = report_lines(&settings(&node)).await;

    res.unwrap();
    assert_eq!(
        lines,
        vec![
            "algod last round: 2729010",
            "algod time since last round: 1500000000",
            "algod catchup: 0",
            "algod latest version: v1.0",
            "hello",
            "",
            "world",
        ]
    );
}

#[tokio::test]
async fn block_round_ignores_last_round() {
    let node = StubNode::start(NodeState::new().with_status(status()).with_block(block(2729005)))
        .await
        .unwrap();

    report_lines(&settings(&node)).await.1.unwrap();

    let paths = node
        .requests()
        .into_iter()
        .map(|req| req.path)
        .collect::<Vec<String>>();
    assert_eq!(paths, vec!["/v1/status", "/v1/block/2729005"]);
}

#[tokio::test]
async fn follow_last_round_asks_for_the_tip() {
    let node = StubNode::start(NodeState::new().with_status(status()).with_block(block(2729010)))
        .await
        .unwrap();

    let settings = Settings {
        follow_last_round: true,
        ..settings(&node)
    };
    report_lines(&settings).await.1.unwrap();

    assert_eq!(node.calls_to("/v1/block/2729010"), 1);
    assert_eq!(node.calls_to("/v1/block/2729005"), 0);
}

#[tokio::test]
async fn status_failure_skips_the_block() {
    let node = StubNode::start(NodeState::new().with_block(block(2729005)))
        .await
        .unwrap();

    let (lines, res) = report_lines(&settings(&node)).await;

    let err = res.unwrap_err();
    assert!(matches!(err, ReportError::Client { step: Step::Status, .. }));
    assert_eq!(err.exit_code(), EXIT_REMOTE);
    assert!(lines.is_empty());
    assert_eq!(node.calls_to("/v1/status"), 1);
    assert_eq!(node.block_calls(), 0);
}

#[tokio::test]
async fn block_failure_keeps_status_lines() {
    let node = StubNode::start(NodeState::new().with_status(status()))
        .await
        .unwrap();

    let (lines, res) = report_lines(&settings(&node)).await;

    let err = res.unwrap_err();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("algod last round"));
    assert_eq!(
        err.to_string(),
        "error getting block 2729005: remote error: HTTP 404: failed to retrieve information from the ledger"
    );
    assert_eq!(node.block_calls(), 1);
}

#[tokio::test]
async fn every_request_carries_the_api_key() {
    let node = StubNode::start(
        NodeState::new()
            .with_status(status())
            .with_block(block(2729005))
            .with_api_key(API_KEY),
    )
    .await
    .unwrap();

    report_lines(&settings(&node)).await.1.unwrap();

    let requests = node.requests();
    assert_eq!(requests.len(), 2);
    for req in requests {
        assert_eq!(req.api_keys(), vec![API_KEY], "{}", req.path);
    }
}

#[tokio::test]
async fn wrong_api_key_is_reported() {
    let node = StubNode::start(NodeState::new().with_status(status()).with_api_key(API_KEY))
        .await
        .unwrap();

    let settings = Settings {
        api_key: Some("stale".to_string()),
        ..settings(&node)
    };
    let (lines, res) = report_lines(&settings).await;

    assert!(lines.is_empty());
    assert!(res.unwrap_err().to_string().starts_with("error getting algod status: remote error: HTTP 401"));
}

#[tokio::test]
async fn note_prefix_filters_lines() {
    let node = StubNode::start(
        NodeState::new().with_status(status()).with_block(Block::new(
            2729005,
            vec![
                Transaction::with_note("ion:EiA1"),
                Transaction::with_note("hello"),
                Transaction::default(),
                Transaction::with_note("ion:EiA2"),
            ],
        )),
    )
    .await
    .unwrap();

    let settings = Settings {
        note_prefix: Some("ion:".to_string()),
        ..settings(&node)
    };
    let (lines, res) = report_lines(&settings).await;

    res.unwrap();
    assert_eq!(&lines[4..], &["ion:EiA1", "ion:EiA2"]);
}

#[tokio::test]
async fn malformed_address_makes_no_requests() {
    let (lines, res) = report_lines(&Settings::new("://nowhere")).await;

    let err = res.unwrap_err();
    assert!(lines.is_empty());
    assert_eq!(err.exit_code(), EXIT_CONFIGURATION);
    assert!(err.to_string().starts_with("failed to make algod client:"));
}

#[tokio::test]
async fn unreachable_node_is_a_network_failure() {
    let (lines, res) = report_lines(&Settings::new(&closed_address().unwrap())).await;

    let err = res.unwrap_err();
    assert!(lines.is_empty());
    assert_eq!(err.exit_code(), EXIT_NETWORK);
    assert!(err.to_string().starts_with("error getting algod status: network error"));
}
