use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    Note,
    Round,
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "tx", default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub tx_type: String,
    #[serde(rename = "from", default)]
    pub sender: String,
    #[serde(default)]
    pub fee: u64,
    #[serde(rename = "first-round", default)]
    pub first_round: Round,
    #[serde(rename = "last-round", default)]
    pub last_round: Round,
    #[serde(rename = "noteb64", default)]
    pub note: Note,
}

impl Transaction {
    /// Transaction carrying only a note, mostly useful for stubs
    pub fn with_note(note: impl Into<Note>) -> Self {
        Self {
            note: note.into(),
            ..Self::default()
        }
    }
}
