use core::fmt;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    num::ParseIntError,
    str::FromStr,
};

/// Sequence number of a block in the ledger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round(pub u64);

impl Round {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for Round {
    fn from(round: u64) -> Self {
        Self(round)
    }
}

impl FromStr for Round {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
