use std::fmt;

/// Broad class of a [`ClientError`], used by callers to pick an exit code
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Network,
    Remote,
}

#[derive(Debug)]
pub enum ClientError {
    /// The client could not be built from the given address, token or headers
    Configuration(String),
    /// The request never produced a response
    Network(reqwest::Error),
    /// The node answered, but not with something usable
    Remote { status: u16, message: String },
}

impl ClientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Network(_) => ErrorKind::Network,
            Self::Remote { .. } => ErrorKind::Remote,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => write!(f, "configuration error: {}", e),
            Self::Network(e) => write!(f, "network error: {}", e),
            Self::Remote { status, message } if message.is_empty() => {
                write!(f, "remote error: HTTP {}", status)
            }
            Self::Remote { status, message } => {
                write!(f, "remote error: HTTP {}: {}", status, message)
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e)
    }
}
