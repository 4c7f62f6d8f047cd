use chrono::{
    DateTime,
    TimeZone,
    Utc,
};
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Round,
    Transaction,
};

/// Transactions finalized at a round, plus the header fields we care about
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub round: Round,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub previous_block_hash: String,
    #[serde(default)]
    pub proposer: String,
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub txns: BlockTransactions,
}

/// The node wraps the list in an object and sends `null` for empty blocks
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockTransactions {
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

impl Block {
    pub fn new(round: u64, transactions: Vec<Transaction>) -> Self {
        Self {
            round: Round(round),
            txns: BlockTransactions {
                transactions: Some(transactions),
            },
            ..Self::default()
        }
    }

    /// Transactions in the order the node returned them
    pub fn transactions(&self) -> &[Transaction] {
        self.txns.transactions.as_deref().unwrap_or_default()
    }

    pub fn time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.timestamp, 0).single()
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use crate::Round;

    #[test]
    fn reads_node_payload() {
        let block: Block = serde_json::from_str(
            r#"{
                "hash": "B4Y3",
                "previousBlockHash": "A2C1",
                "proposer": "PROP",
                "round": 2729005,
                "timestamp": 1571160000,
                "txns": {
                    "transactions": [
                        { "tx": "T1", "type": "pay", "from": "ADDR", "fee": 1000, "noteb64": "aGVsbG8=" },
                        { "tx": "T2", "type": "pay", "from": "ADDR", "fee": 1000 },
                        { "tx": "T3", "type": "pay", "from": "ADDR", "fee": 1000, "noteb64": "d29ybGQ=" }
                    ]
                }
            }"#,
        )
        .unwrap();

        assert_eq!(block.round, Round(2729005));
        assert_eq!(block.previous_block_hash, "A2C1");
        let notes = block
            .transactions()
            .iter()
            .map(|tx| tx.note.as_text().into_owned())
            .collect::<Vec<String>>();
        assert_eq!(notes, vec!["hello", "", "world"]);
        assert_eq!(block.transactions()[0].id, "T1");
        assert!(block.time().is_some());
    }

    #[test]
    fn empty_blocks() {
        let block: Block = serde_json::from_str(r#"{ "round": 1, "txns": { "transactions": null } }"#).unwrap();
        assert!(block.transactions().is_empty());

        let block: Block = serde_json::from_str(r#"{ "round": 1 }"#).unwrap();
        assert!(block.transactions().is_empty());
    }

    #[test]
    fn bad_note_fails_the_block() {
        let res = serde_json::from_str::<Block>(
            r#"{ "round": 1, "txns": { "transactions": [ { "noteb64": "%%%" } ] } }"#,
        );
        assert!(res.is_err());
    }
}
