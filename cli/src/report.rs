use client::{
    ClientError,
    ErrorKind,
    LedgerApi,
    NodeClient,
};
use ledger::Round;
use std::{
    fmt,
    io::{
        self,
        Write,
    },
};

use crate::Settings;

pub const EXIT_CONFIGURATION: u8 = 2;
pub const EXIT_NETWORK: u8 = 3;
pub const EXIT_REMOTE: u8 = 4;
pub const EXIT_OUTPUT: u8 = 74;

/// The step a report stopped at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Connect,
    Status,
    Block(Round),
}

#[derive(Debug)]
pub enum ReportError {
    Client { step: Step, error: ClientError },
    Output(io::Error),
}

impl ReportError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Client { error, .. } => match error.kind() {
                ErrorKind::Configuration => EXIT_CONFIGURATION,
                ErrorKind::Network => EXIT_NETWORK,
                ErrorKind::Remote => EXIT_REMOTE,
            },
            Self::Output(_) => EXIT_OUTPUT,
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Client { step: Step::Connect, error } => {
                write!(f, "failed to make algod client: {}", error)
            }
            Self::Client { step: Step::Status, error } => {
                write!(f, "error getting algod status: {}", error)
            }
            Self::Client { step: Step::Block(round), error } => {
                write!(f, "error getting block {}: {}", round, error)
            }
            Self::Output(e) => write!(f, "failed to write report: {}", e),
        }
    }
}

impl std::error::Error for ReportError {}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}

/*
 * Build a client from the settings and report through it
 */
pub async fn run<W: Write>(settings: &Settings, out: &mut W) -> Result<(), ReportError> {
    let client = NodeClient::new(&settings.configuration()).map_err(|error| ReportError::Client {
        step: Step::Connect,
        error,
    })?;

    if settings.api_key.is_none() {
        tracing::warn!("(Reporter) No API key configured, requests go out without one");
    }

    report(&client, settings, out).await
}

/// Print the node status, then the notes of the configured block.
///
/// The block is only requested once the status came back. Each note is one
/// line, in the order the node listed the transactions.
pub async fn report<A, W>(api: &A, settings: &Settings, out: &mut W) -> Result<(), ReportError>
where
    A: LedgerApi + ?Sized,
    W: Write,
{
    let status = api.status().await.map_err(|error| ReportError::Client {
        step: Step::Status,
        error,
    })?;

    writeln!(out, "algod last round: {}", status.last_round)?;
    writeln!(out, "algod time since last round: {}", status.time_since_last_round)?;
    writeln!(out, "algod catchup: {}", status.catchup_time)?;
    writeln!(out, "algod latest version: {}", status.last_version)?;

    let round = settings.block_round(status.last_round);

    let block = api.block(round).await.map_err(|error| ReportError::Client {
        step: Step::Block(round),
        error,
    })?;

    tracing::info!(
        "(Reporter) Block {} has {} transactions",
        block.round,
        block.transactions().len()
    );

    let prefix = settings.note_prefix.as_deref().unwrap_or_default();

    for tx in block.transactions() {
        if tx.note.starts_with(prefix.as_bytes()) {
            writeln!(out, "{}", tx.note.as_text())?;
        }
    }

    out.flush()?;

    Ok(())
}
