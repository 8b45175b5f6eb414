//! Balance and UTXO count for an address

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::api::KaspaApi;
use crate::sender::WalletSource;
use crate::types::sompi_to_kas;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetBalanceParams {
    /// Address to check; defaults to the wallet's own address
    pub address: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetBalanceResult {
    pub address: String,
    /// Balance in KAS
    pub balance: String,
    pub utxo_count: usize,
}

pub async fn get_balance(
    params: GetBalanceParams,
    wallet: &dyn WalletSource,
    api: &KaspaApi,
) -> Result<GetBalanceResult> {
    let address = params
        .address
        .unwrap_or_else(|| wallet.address().to_string());

    let (balance, utxos) = tokio::try_join!(api.balance(&address), api.utxos(&address))?;
    let balance_sompi: u64 = balance
        .balance
        .parse()
        .context("API returned a non-numeric balance")?;

    Ok(GetBalanceResult {
        address,
        balance: sompi_to_kas(balance_sompi),
        utxo_count: utxos.len(),
    })
}
