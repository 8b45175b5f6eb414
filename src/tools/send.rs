//! Send KAS to a recipient address
//!
//! Validates the request at the tool boundary, then hands it to the
//! submission pipeline. The node transport and transaction generator are
//! host-provided collaborators.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::sender::{
    send_funds, FeeOracle, SendOptions, SendRequest, TransactionBuilder, UtxoSource, WalletSource,
};
use crate::types::{kas_to_sompi, sompi_to_kas, Address, AddressError, NetworkId};

#[derive(Debug, Clone, Deserialize)]
pub struct SendParams {
    /// Recipient address
    pub to: String,
    /// Amount in KAS
    pub amount: String,
    /// Priority fee in sompi
    #[serde(default)]
    pub priority_fee: Option<u64>,
    /// Opaque payload attached to the transaction
    #[serde(default)]
    pub payload: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SendResult {
    pub tx_id: String,
    /// Total fee paid, in KAS
    pub fee: String,
}

pub async fn send<W, O, S, B>(
    params: SendParams,
    wallet: &W,
    oracle: &O,
    source: &S,
    builder: &B,
    options: &SendOptions,
) -> Result<SendResult>
where
    W: WalletSource,
    O: FeeOracle,
    S: UtxoSource,
    B: TransactionBuilder,
{
    if params.to.is_empty() {
        return Err(anyhow!("recipient address (to) is required"));
    }
    if params.amount.is_empty() {
        return Err(anyhow!("amount is required"));
    }
    validate_recipient(&params.to, wallet.network_id())?;
    let amount = kas_to_sompi(&params.amount)?;

    let mut request =
        SendRequest::new(params.to, amount).with_priority_fee(params.priority_fee.unwrap_or(0));
    if let Some(payload) = params.payload {
        request = request.with_payload(payload.into_bytes());
    }

    let outcome = send_funds(wallet, oracle, source, builder, request, options).await?;
    Ok(SendResult {
        tx_id: outcome.tx_id,
        fee: sompi_to_kas(outcome.fee),
    })
}

fn validate_recipient(to: &str, network: NetworkId) -> Result<(), AddressError> {
    let parsed = Address::parse(to)?;
    if !parsed.matches_network(network) {
        return Err(AddressError::NetworkMismatch {
            wallet: network.to_string(),
            address: parsed.prefix().network_name().to_string(),
        });
    }
    Ok(())
}
