use serde::{
    Deserialize,
    Serialize,
};

/// Public algod endpoint the reporter talks to when nothing else is given
pub const DEFAULT_ADDRESS: &str = "https://testnet-algorand.api.purestake.io/ps1";

/// Header used by hosted node providers to carry the API key
pub const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn api_key(value: &str) -> Self {
        Self::new(API_KEY_HEADER, value)
    }
}

/// Where and how to reach a node.
///
/// Headers are kept exactly as given, duplicates and order included. There is
/// no way to change anything once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Configuration {
    address: String,
    token: String,
    headers: Vec<Header>,
}

impl Configuration {
    pub fn new(address: &str) -> Self {
        Self::from_params(address, "", Vec::new())
    }

    pub fn from_params(address: &str, token: &str, headers: Vec<Header>) -> Self {
        Self {
            address: address.to_string(),
            token: token.to_string(),
            headers,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS)
    }
}
