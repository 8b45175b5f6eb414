//! Collaborator contracts consumed by the submission pipeline
//!
//! Everything domain-hard lives behind these traits: the wallet SDK
//! supplies keys and addresses, the node transport supplies UTXOs and
//! broadcast, the fee oracle supplies feerate buckets, and the KIP-9
//! generator supplies the chained transaction sequence. The pipeline
//! itself only orchestrates.

use anyhow::Result;
use async_trait::async_trait;
use nonempty::NonEmpty;
use serde::{Deserialize, Serialize};

use crate::types::NetworkId;
use crate::wallet::SigningKey;

/// A spendable output. The handle is provider-specific and opaque; the
/// pipeline only reads the amount (in sompi).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingEntry {
    pub amount: u64,
    #[serde(default)]
    pub handle: serde_json::Value,
}

impl FundingEntry {
    pub fn new(amount: u64, handle: serde_json::Value) -> Self {
        Self { amount, handle }
    }
}

/// Node sync status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerStatus {
    pub synced: bool,
}

/// Top-tier feerate used to project a worst-case fee. Other buckets are
/// irrelevant to the sufficiency check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeEstimate {
    pub priority_feerate: f64,
}

/// Post-loop accounting from the generator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorSummary {
    /// Total fee actually charged across all emitted transactions, in sompi
    pub total_fee: u64,
}

/// Inputs handed to the transaction generator.
///
/// `entries` is non-empty by construction and sorted ascending by amount;
/// the KIP-9 splitting algorithm relies on that canonical order for
/// deterministic output.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub entries: NonEmpty<FundingEntry>,
    pub recipient: String,
    pub amount: u64,
    pub priority_fee: u64,
    pub change_address: String,
    pub network_id: NetworkId,
    pub payload: Option<Vec<u8>>,
}

/// Sender identity: address, network, and signing key handle
pub trait WalletSource: Send + Sync {
    fn address(&self) -> &str;
    fn network_id(&self) -> NetworkId;
    fn signing_key(&self) -> &SigningKey;
}

/// Current fee-rate buckets on request
#[async_trait]
pub trait FeeOracle: Send + Sync {
    async fn current_fee_estimate(&self) -> Result<FeeEstimate>;
}

/// Node-side view: connection lifecycle, sync status, and spendable
/// outputs for an address
#[async_trait]
pub trait UtxoSource: Send + Sync {
    async fn connect(&self) -> Result<()>;
    async fn disconnect(&self) -> Result<()>;
    async fn server_status(&self) -> Result<ServerStatus>;
    async fn funding_entries(&self, address: &str) -> Result<Vec<FundingEntry>>;
}

/// One unsigned transaction out of the generator. Sign and submit may
/// fail independently; submit returns the accepted transaction id.
#[async_trait]
pub trait PendingTransaction: Send {
    async fn sign(&mut self, key: &SigningKey) -> Result<()>;
    async fn submit(&mut self, source: &dyn UtxoSource) -> Result<String>;
}

/// Finite, non-restartable lazy sequence of unsigned transactions.
///
/// Pull-based on purpose: later transactions in a KIP-9 split may spend
/// change produced by earlier ones, so the pipeline must never reorder,
/// parallelize, or request ahead.
#[async_trait]
pub trait TransactionGenerator: Send {
    async fn next(&mut self) -> Result<Option<Box<dyn PendingTransaction>>>;
    fn summary(&self) -> GeneratorSummary;
}

/// Factory for generators, constructed once per submission
pub trait TransactionBuilder: Send + Sync {
    type Generator: TransactionGenerator;

    fn generator(&self, settings: GeneratorSettings) -> Result<Self::Generator>;
}
