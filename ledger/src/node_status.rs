use serde::{
    Deserialize,
    Serialize,
};
use std::time::Duration;

use crate::Round;

/// Point-in-time summary of a node's sync progress.
///
/// Both durations are reported by the node in nanoseconds and are kept raw so
/// they print the same way the node sent them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStatus {
    pub last_round: Round,
    #[serde(default)]
    pub time_since_last_round: u64,
    #[serde(default)]
    pub catchup_time: u64,
    #[serde(rename = "lastConsensusVersion", alias = "lastVersion", default)]
    pub last_version: String,
    #[serde(rename = "nextConsensusVersion", alias = "nextVersion", default)]
    pub next_version: String,
    #[serde(rename = "nextConsensusVersionRound", alias = "nextVersionRound", default)]
    pub next_version_round: Round,
    #[serde(rename = "nextConsensusVersionSupported", alias = "nextVersionSupported", default)]
    pub next_version_supported: bool,
    #[serde(default)]
    pub has_synced_since_startup: bool,
    #[serde(default)]
    pub stopped_at_unsupported_round: bool,
}

impl NodeStatus {
    pub fn since_last_round(&self) -> Duration {
        Duration::from_nanos(self.time_since_last_round)
    }

    pub fn catchup(&self) -> Duration {
        Duration::from_nanos(self.catchup_time)
    }
}
