use argh::FromArgs;
use ledger::{
    Configuration,
    Header,
    Round,
    DEFAULT_ADDRESS,
};

/// Environment variable the API key is read from when not passed explicitly
pub const API_KEY_ENV: &str = "ALGOD_API_KEY";

/// Round printed by default. It is a fixed round, unrelated to the node's
/// current last round.
pub const DEFAULT_ROUND: Round = Round(2729005);

/// Print an algod node's status and the notes of one block
#[derive(Debug, FromArgs)]
pub struct Args {
    /// base URL of the algod REST API
    #[argh(option, default = "DEFAULT_ADDRESS.to_string()")]
    pub address: String,

    /// value sent as X-API-Key (defaults to $ALGOD_API_KEY)
    #[argh(option)]
    pub api_key: Option<String>,

    /// algod API token, sent as X-Algo-API-Token when not empty
    #[argh(option, default = "String::new()")]
    pub token: String,

    /// round of the block to print (default 2729005, not the node's last round)
    #[argh(option, default = "DEFAULT_ROUND")]
    pub round: Round,

    /// print the block at the node's last round instead of --round
    #[argh(switch)]
    pub follow_last_round: bool,

    /// only print notes starting with this text
    #[argh(option)]
    pub note_prefix: Option<String>,
}

impl Args {
    /// Resolve the arguments, falling back to `env_api_key` for the key
    pub fn into_settings(self, env_api_key: Option<String>) -> Settings {
        let api_key = self
            .api_key
            .or_else(|| env_api_key.filter(|key| !key.is_empty()));

        Settings {
            address: self.address,
            token: self.token,
            api_key,
            round: self.round,
            follow_last_round: self.follow_last_round,
            note_prefix: self.note_prefix,
        }
    }
}

/// Everything a report run needs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub address: String,
    pub token: String,
    pub api_key: Option<String>,
    pub round: Round,
    pub follow_last_round: bool,
    pub note_prefix: Option<String>,
}

impl Settings {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            token: String::new(),
            api_key: None,
            round: DEFAULT_ROUND,
            follow_last_round: false,
            note_prefix: None,
        }
    }

    pub fn configuration(&self) -> Configuration {
        let headers = self
            .api_key
            .iter()
            .map(|key| Header::api_key(key))
            .collect();
        Configuration::from_params(&self.address, &self.token, headers)
    }

    /// Round to fetch once the node's last round is known
    pub fn block_round(&self, last_round: Round) -> Round {
        if self.follow_last_round {
            last_round
        } else {
            self.round
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}
