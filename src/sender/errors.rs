//! Error taxonomy for the funded submission pipeline
//!
//! The one contract that matters most here: once a transaction has been
//! broadcast, no later failure may lose its identifier. Every error path
//! that follows a successful submit is wrapped in `PartiallyCompleted`,
//! whose message enumerates the already-broadcast ids so an operator can
//! reconcile without querying the chain first.

use std::time::Duration;

use thiserror::Error;

use crate::types::Kas;

#[derive(Error, Debug)]
pub enum SenderError {
    /// The node connection attempt did not settle within the hard cap.
    /// A single attempt only; the in-flight connect is dropped, never
    /// retried.
    #[error("node connection attempt timed out after {0:?}")]
    ConnectionTimedOut(Duration),

    /// The node reports it is not synced. Fatal, not retried.
    #[error("RPC node is not synced")]
    NodeNotSynced,

    /// The wallet address has no spendable outputs.
    #[error("no UTXOs available")]
    NoFundingEntries,

    /// Available funds do not cover amount + projected fee + priority fee.
    /// Both figures are rendered in KAS.
    #[error("insufficient balance: have {available} KAS, need ~{required} KAS (including estimated fees)")]
    InsufficientFunds { available: Kas, required: Kas },

    /// Inputs and request validated, yet the generator emitted nothing.
    /// Distinct from a hard rejection.
    #[error("transaction generator produced no transactions")]
    NoTransactionsProduced,

    /// Signing failed. Fatal, not retried.
    #[error("signing failed: {0}")]
    Signing(String),

    /// The node rejected or failed a broadcast.
    #[error("transaction submit failed: {0}")]
    Submit(String),

    /// A failure occurred after at least one transaction was broadcast.
    /// The submitted list is complete and in submission order.
    #[error(
        "partially completed: {} transaction(s) already broadcast [{}]; cause: {cause}",
        .submitted.len(),
        .submitted.join(", ")
    )]
    PartiallyCompleted {
        submitted: Vec<String>,
        cause: String,
    },

    /// Collaborator failure surfaced verbatim (connect, status, UTXO
    /// fetch, fee oracle, generator construction).
    #[error(transparent)]
    External(#[from] anyhow::Error),
}

impl SenderError {
    /// Error category for log fields
    pub fn category(&self) -> &'static str {
        match self {
            Self::ConnectionTimedOut(_) => "connect",
            Self::NodeNotSynced => "sync",
            Self::NoFundingEntries => "funding",
            Self::InsufficientFunds { .. } => "funding",
            Self::NoTransactionsProduced => "generation",
            Self::Signing(_) => "signing",
            Self::Submit(_) => "submit",
            Self::PartiallyCompleted { .. } => "accounting",
            Self::External(_) => "external",
        }
    }

    /// Identifiers of transactions broadcast before the failure, if any
    pub fn submitted_ids(&self) -> &[String] {
        match self {
            Self::PartiallyCompleted { submitted, .. } => submitted,
            _ => &[],
        }
    }
}
