//! Funded transaction submission pipeline
//!
//! Turns a validated "pay X to address Y" request into one or more
//! signed, broadcast transactions while guarding against a hanging
//! connection, insufficient funds, and partial broadcast failure.
//!
//! Split into focused modules:
//! - **errors**: pipeline error taxonomy
//! - **sources**: collaborator contracts and the shared data model
//! - **connect**: connection establishment under a hard timeout
//! - **funding**: balance sufficiency against a live fee estimate, plus
//!   the smallest-first UTXO ordering policy
//! - **pipeline**: the sequential generate/sign/submit loop and the
//!   broadcast accounting that preserves already-submitted ids on
//!   failure

pub mod errors;
pub use errors::SenderError;

mod connect;
mod funding;
mod pipeline;
mod sources;

pub use connect::connect_with_timeout;
pub use funding::{assure_funds, sort_entries};
pub use pipeline::{send_funds, SendOptions, SendOutcome, SendRequest};
pub use sources::{
    FeeEstimate, FeeOracle, FundingEntry, GeneratorSettings, GeneratorSummary, PendingTransaction,
    ServerStatus, TransactionBuilder, TransactionGenerator, UtxoSource, WalletSource,
};
