//! The funded submission pipeline
//!
//! Orchestration of one send: guarded connect, sync check, funding
//! assurance, the strictly sequential generate/sign/submit loop, and
//! broadcast accounting. All suspension points run on one cooperative
//! task; nothing here signs or submits in parallel.

use std::time::Duration;

use nonempty::NonEmpty;
use tracing::{debug, info, warn};

use super::connect::connect_with_timeout;
use super::errors::SenderError;
use super::funding::{assure_funds, sort_entries};
use super::sources::{
    FeeOracle, GeneratorSettings, GeneratorSummary, TransactionBuilder, TransactionGenerator,
    UtxoSource, WalletSource,
};
use crate::config::Config;
use crate::observability::CorrelationId;

/// A validated "pay X to address Y" request. Validation (address format,
/// network match, amount positivity) happens at the tool boundary before
/// this type is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct SendRequest {
    pub recipient: String,
    /// Amount in sompi
    pub amount: u64,
    /// Additional fee in sompi, on top of the network fee
    pub priority_fee: u64,
    /// Opaque payload forwarded to the generator
    pub payload: Option<Vec<u8>>,
}

impl SendRequest {
    pub fn new(recipient: impl Into<String>, amount: u64) -> Self {
        Self {
            recipient: recipient.into(),
            amount,
            priority_fee: 0,
            payload: None,
        }
    }

    pub fn with_priority_fee(mut self, priority_fee: u64) -> Self {
        self.priority_fee = priority_fee;
        self
    }

    pub fn with_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Terminal result of a fully successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    /// Identifier of the last transaction in the batch
    pub tx_id: String,
    /// Total fee charged across the batch, in sompi
    pub fee: u64,
}

/// Pipeline tuning knobs
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub connect_timeout: Duration,
    /// Mass units assumed when projecting the fee margin
    pub fee_mass: u64,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            fee_mass: 3000,
        }
    }
}

impl SendOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            connect_timeout: Duration::from_secs(config.node.connect_timeout_secs),
            fee_mass: config.fee.estimate_mass,
        }
    }
}

/// Run one funded submission end to end.
///
/// The node connection is opened under a hard timeout and released
/// unconditionally once opened, whatever happens in between. A disconnect
/// failure is logged and swallowed so it can never mask the meaningful
/// error that preceded it.
pub async fn send_funds<W, O, S, B>(
    wallet: &W,
    oracle: &O,
    source: &S,
    builder: &B,
    request: SendRequest,
    options: &SendOptions,
) -> Result<SendOutcome, SenderError>
where
    W: WalletSource,
    O: FeeOracle,
    S: UtxoSource,
    B: TransactionBuilder,
{
    let correlation_id = CorrelationId::new();
    info!(
        correlation_id = %correlation_id,
        recipient = %request.recipient,
        amount_sompi = request.amount,
        priority_fee_sompi = request.priority_fee,
        "starting submission"
    );

    connect_with_timeout(source, options.connect_timeout).await?;

    let result = drive(wallet, oracle, source, builder, &request, options, &correlation_id).await;

    // Release the connection on every post-connect path.
    if let Err(e) = source.disconnect().await {
        warn!(
            correlation_id = %correlation_id,
            error = %e,
            "ignoring disconnect failure"
        );
    }

    match &result {
        Ok(outcome) => info!(
            correlation_id = %correlation_id,
            tx_id = %outcome.tx_id,
            fee_sompi = outcome.fee,
            "submission complete"
        ),
        Err(e) => warn!(
            correlation_id = %correlation_id,
            category = e.category(),
            error = %e,
            "submission failed"
        ),
    }
    result
}

async fn drive<W, O, S, B>(
    wallet: &W,
    oracle: &O,
    source: &S,
    builder: &B,
    request: &SendRequest,
    options: &SendOptions,
    correlation_id: &CorrelationId,
) -> Result<SendOutcome, SenderError>
where
    W: WalletSource,
    O: FeeOracle,
    S: UtxoSource,
    B: TransactionBuilder,
{
    let status = source.server_status().await?;
    if !status.synced {
        return Err(SenderError::NodeNotSynced);
    }

    let mut entries = source.funding_entries(wallet.address()).await?;
    let total_available = assure_funds(
        &entries,
        request.amount,
        request.priority_fee,
        oracle,
        options.fee_mass,
    )
    .await?;
    debug!(
        correlation_id = %correlation_id,
        entries = entries.len(),
        total_available_sompi = total_available,
        "funding assured"
    );

    sort_entries(&mut entries);
    let entries = NonEmpty::from_vec(entries).ok_or(SenderError::NoFundingEntries)?;

    let settings = GeneratorSettings {
        entries,
        recipient: request.recipient.clone(),
        amount: request.amount,
        priority_fee: request.priority_fee,
        change_address: wallet.address().to_string(),
        network_id: wallet.network_id(),
        payload: request.payload.clone(),
    };
    let mut generator = builder.generator(settings)?;

    let mut submitted: Vec<String> = Vec::new();
    let loop_result =
        run_submission_loop(wallet, source, &mut generator, &mut submitted, correlation_id).await;
    finalize(submitted, generator.summary(), loop_result)
}

/// Drive the generator's sequence: sign and broadcast each transaction in
/// the exact order yielded, recording every accepted id before asking for
/// the next. Strictly sequential; a later transaction may spend change
/// from an earlier one.
async fn run_submission_loop<W, S, G>(
    wallet: &W,
    source: &S,
    generator: &mut G,
    submitted: &mut Vec<String>,
    correlation_id: &CorrelationId,
) -> Result<(), SenderError>
where
    W: WalletSource,
    S: UtxoSource,
    G: TransactionGenerator,
{
    while let Some(mut pending) = generator.next().await? {
        pending
            .sign(wallet.signing_key())
            .await
            .map_err(|e| SenderError::Signing(e.to_string()))?;
        let tx_id = pending
            .submit(source as &dyn UtxoSource)
            .await
            .map_err(|e| SenderError::Submit(e.to_string()))?;
        debug!(
            correlation_id = %correlation_id,
            tx_id = %tx_id,
            position = submitted.len(),
            "transaction broadcast"
        );
        submitted.push(tx_id);
    }
    Ok(())
}

/// Broadcast accounting.
///
/// Success with no emitted transaction is its own failure. An error after
/// at least one broadcast is wrapped so the submitted ids survive; an
/// error before any broadcast is rethrown unchanged so callers see the
/// precise root cause.
fn finalize(
    submitted: Vec<String>,
    summary: GeneratorSummary,
    loop_result: Result<(), SenderError>,
) -> Result<SendOutcome, SenderError> {
    match loop_result {
        Ok(()) => match submitted.last() {
            Some(last) => Ok(SendOutcome {
                tx_id: last.clone(),
                fee: summary.total_fee,
            }),
            None => Err(SenderError::NoTransactionsProduced),
        },
        Err(e) if !submitted.is_empty() => Err(SenderError::PartiallyCompleted {
            cause: e.to_string(),
            submitted,
        }),
        Err(e) => Err(e),
    }
}
