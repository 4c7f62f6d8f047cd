use serde::{
    de::Error,
    Deserialize,
    Deserializer,
    Serialize,
    Serializer,
};
use std::borrow::Cow;

/// Free-form bytes attached to a transaction.
///
/// On the wire it travels as standard base64 (`noteb64`). A missing, null or
/// empty field is an empty note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Note(pub Vec<u8>);

impl Note {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Note interpreted as text, invalid UTF-8 is replaced
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl From<&str> for Note {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for Note {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&base64::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        base64::decode(encoded.as_bytes())
            .map(Self)
            .map_err(|err| D::Error::custom(format!("invalid base64 note: {}", err)))
    }
}
