//! Shared domain types: network identifiers, address handling, sompi/KAS
//! conversion, and REST API response shapes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest unit of KAS (1 KAS = 100,000,000 sompi).
pub const SOMPI_PER_KAS: u64 = 100_000_000;

/// Maximum fractional digits a KAS amount string may carry.
pub const MAX_KAS_DECIMALS: usize = 8;

/// Networks the adapter can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkId {
    #[serde(rename = "mainnet")]
    Mainnet,
    #[serde(rename = "testnet-10")]
    Testnet10,
    #[serde(rename = "testnet-11")]
    Testnet11,
}

impl NetworkId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet10 => "testnet-10",
            Self::Testnet11 => "testnet-11",
        }
    }

    /// Bech32-style address prefix expected on this network.
    pub fn address_prefix(&self) -> &'static str {
        match self {
            Self::Mainnet => "kaspa",
            Self::Testnet10 | Self::Testnet11 => "kaspatest",
        }
    }
}

impl Default for NetworkId {
    fn default() -> Self {
        Self::Mainnet
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown network \"{0}\"; supported: mainnet, testnet-10, testnet-11")]
pub struct UnknownNetwork(pub String);

impl FromStr for NetworkId {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet-10" => Ok(Self::Testnet10),
            "testnet-11" => Ok(Self::Testnet11),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

/// A sompi amount rendered in KAS for human-readable output.
///
/// Stored losslessly in sompi; `Display` trims trailing fractional zeros
/// ("1", "1.5", "0.00000001").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Kas(pub u64);

impl fmt::Display for Kas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / SOMPI_PER_KAS;
        let frac = self.0 % SOMPI_PER_KAS;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:08}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

/// Render a sompi amount as a KAS decimal string.
pub fn sompi_to_kas(sompi: u64) -> String {
    Kas(sompi).to_string()
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount must be a valid decimal number")]
    Malformed,
    #[error("amount cannot have more than {MAX_KAS_DECIMALS} decimal places")]
    TooPrecise,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount is out of range")]
    OutOfRange,
}

/// Parse a KAS decimal string ("1", "1.5") into sompi.
///
/// Rejects malformed input, more than 8 fractional digits, zero, and
/// values that do not fit in a u64.
pub fn kas_to_sompi(amount: &str) -> Result<u64, AmountError> {
    let trimmed = amount.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(whole) || (trimmed.contains('.') && !all_digits(frac)) {
        return Err(AmountError::Malformed);
    }
    if frac.len() > MAX_KAS_DECIMALS {
        return Err(AmountError::TooPrecise);
    }

    let whole: u64 = whole.parse().map_err(|_| AmountError::OutOfRange)?;
    let mut frac_sompi = 0u64;
    if !frac.is_empty() {
        let padded = format!("{:0<width$}", frac, width = MAX_KAS_DECIMALS);
        frac_sompi = padded.parse().map_err(|_| AmountError::OutOfRange)?;
    }

    let sompi = whole
        .checked_mul(SOMPI_PER_KAS)
        .and_then(|v| v.checked_add(frac_sompi))
        .ok_or(AmountError::OutOfRange)?;

    if sompi == 0 {
        return Err(AmountError::NotPositive);
    }
    Ok(sompi)
}

const ADDRESS_CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid kaspa address: {0}")]
    Invalid(String),
    #[error("address network mismatch: wallet is on {wallet}, but address is for {address}")]
    NetworkMismatch { wallet: String, address: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressPrefix {
    Kaspa,
    Kaspatest,
}

impl AddressPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kaspa => "kaspa",
            Self::Kaspatest => "kaspatest",
        }
    }

    /// Coarse network family, used in mismatch messages.
    pub fn network_name(&self) -> &'static str {
        match self {
            Self::Kaspa => "mainnet",
            Self::Kaspatest => "testnet",
        }
    }
}

/// Prefix-level view of a Kaspa address.
///
/// Full cashaddr checksum validation belongs to the wallet SDK and the
/// node; this type only splits the prefix and sanity-checks the payload
/// charset, which is all the tool layer needs for network matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    prefix: AddressPrefix,
    payload: String,
}

impl Address {
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let (prefix, payload) = s
            .split_once(':')
            .ok_or_else(|| AddressError::Invalid(s.to_string()))?;

        let prefix = match prefix {
            "kaspa" => AddressPrefix::Kaspa,
            "kaspatest" => AddressPrefix::Kaspatest,
            _ => return Err(AddressError::Invalid(s.to_string())),
        };

        if payload.is_empty() || !payload.chars().all(|c| ADDRESS_CHARSET.contains(c)) {
            return Err(AddressError::Invalid(s.to_string()));
        }

        Ok(Self {
            prefix,
            payload: payload.to_string(),
        })
    }

    pub fn prefix(&self) -> AddressPrefix {
        self.prefix
    }

    pub fn matches_network(&self, network: NetworkId) -> bool {
        self.prefix.as_str() == network.address_prefix()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix.as_str(), self.payload)
    }
}

// REST API response shapes (api.kaspa.org). Amount-bearing fields arrive
// as decimal strings because they can exceed the JSON safe-integer range.

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub address: String,
    pub balance: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoResponse {
    pub address: String,
    pub outpoint: Outpoint,
    pub utxo_entry: UtxoEntry,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outpoint {
    pub transaction_id: String,
    pub index: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtxoEntry {
    pub amount: String,
    #[serde(default)]
    pub block_daa_score: String,
    #[serde(default)]
    pub is_coinbase: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeEstimateResponse {
    pub priority_bucket: FeeBucket,
    #[serde(default)]
    pub normal_buckets: Vec<FeeBucket>,
    #[serde(default)]
    pub low_buckets: Vec<FeeBucket>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBucket {
    pub feerate: f64,
    #[serde(default)]
    pub estimated_seconds: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub block_hash: Vec<String>,
    #[serde(default)]
    pub block_time: Option<i64>,
    pub is_accepted: bool,
    #[serde(default)]
    pub inputs: Vec<TransactionInputResponse>,
    #[serde(default)]
    pub outputs: Vec<TransactionOutputResponse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInputResponse {
    pub previous_outpoint_hash: String,
    pub previous_outpoint_index: String,
    #[serde(default)]
    pub signature_script: String,
    #[serde(default)]
    pub sig_op_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionOutputResponse {
    pub amount: String,
    #[serde(default)]
    pub script_public_key: String,
    pub script_public_key_address: String,
    #[serde(default)]
    pub script_public_key_type: String,
}
