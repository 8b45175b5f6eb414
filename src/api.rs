//! REST API client for the Kaspa public indexer
//!
//! Stateless pass-through for balance, UTXO, fee-estimate, and
//! transaction lookups. One cached client per network for the process
//! lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::sender::{FeeEstimate, FeeOracle};
use crate::types::{
    BalanceResponse, FeeEstimateResponse, NetworkId, TransactionResponse, UtxoResponse,
};

#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response; body text is preserved for diagnostics
    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// REST endpoint for each supported network
fn endpoint(network: NetworkId) -> &'static str {
    match network {
        NetworkId::Mainnet => "https://api.kaspa.org",
        NetworkId::Testnet10 => "https://api-tn10.kaspa.org",
        NetworkId::Testnet11 => "https://api-tn11.kaspa.org",
    }
}

#[derive(Debug, Clone)]
pub struct KaspaApi {
    base_url: String,
    client: reqwest::Client,
}

impl KaspaApi {
    pub fn new(network: NetworkId) -> Self {
        Self::with_base_url(endpoint(network))
    }

    pub(crate) fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    pub async fn balance(&self, address: &str) -> Result<BalanceResponse, ApiError> {
        self.get_json(&format!("/addresses/{address}/balance")).await
    }

    pub async fn utxos(&self, address: &str) -> Result<Vec<UtxoResponse>, ApiError> {
        self.get_json(&format!("/addresses/{address}/utxos")).await
    }

    pub async fn fee_estimate(&self) -> Result<FeeEstimateResponse, ApiError> {
        self.get_json("/info/fee-estimate").await
    }

    pub async fn transaction(&self, tx_id: &str) -> Result<TransactionResponse, ApiError> {
        self.get_json(&format!("/transactions/{tx_id}")).await
    }
}

#[async_trait]
impl FeeOracle for KaspaApi {
    async fn current_fee_estimate(&self) -> Result<FeeEstimate> {
        let response = self.fee_estimate().await?;
        Ok(FeeEstimate {
            priority_feerate: response.priority_bucket.feerate,
        })
    }
}

static CLIENTS: Lazy<Mutex<HashMap<NetworkId, Arc<KaspaApi>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Process-wide API client for a network, created on first use.
///
/// The mutex guards lazy initialization so concurrent first calls on a
/// multi-threaded runtime cannot construct duplicates.
pub fn for_network(network: NetworkId) -> Arc<KaspaApi> {
    let mut clients = CLIENTS.lock();
    clients
        .entry(network)
        .or_insert_with(|| Arc::new(KaspaApi::new(network)))
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_per_network() {
        assert_eq!(endpoint(NetworkId::Mainnet), "https://api.kaspa.org");
        assert_eq!(endpoint(NetworkId::Testnet10), "https://api-tn10.kaspa.org");
        assert_eq!(endpoint(NetworkId::Testnet11), "https://api-tn11.kaspa.org");
    }

    #[test]
    fn for_network_caches_clients() {
        let first = for_network(NetworkId::Testnet11);
        let second = for_network(NetworkId::Testnet11);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn fetches_balance() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/addresses/kaspa:qq2efzv5/balance")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"address":"kaspa:qq2efzv5","balance":"1000000000"}"#)
            .create_async()
            .await;

        let api = KaspaApi::with_base_url(server.url());
        let balance = api.balance("kaspa:qq2efzv5").await.unwrap();
        assert_eq!(balance.balance, "1000000000");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn fetches_utxos() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/addresses/kaspa:qq2efzv5/utxos")
            .with_status(200)
            .with_body(
                r#"[{
                    "address": "kaspa:qq2efzv5",
                    "outpoint": { "transactionId": "aa", "index": 0 },
                    "utxoEntry": { "amount": "500000000", "blockDaaScore": "1", "isCoinbase": false }
                }]"#,
            )
            .create_async()
            .await;

        let api = KaspaApi::with_base_url(server.url());
        let utxos = api.utxos("kaspa:qq2efzv5").await.unwrap();
        assert_eq!(utxos.len(), 1);
        assert_eq!(utxos[0].utxo_entry.amount, "500000000");
        assert_eq!(utxos[0].outpoint.transaction_id, "aa");
    }

    #[tokio::test]
    async fn fetches_fee_estimate_and_serves_the_oracle() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/info/fee-estimate")
            .with_status(200)
            .with_body(
                r#"{
                    "priorityBucket": { "feerate": 2.5, "estimatedSeconds": 1.0 },
                    "normalBuckets": [],
                    "lowBuckets": []
                }"#,
            )
            .expect(2)
            .create_async()
            .await;

        let api = KaspaApi::with_base_url(server.url());
        let estimate = api.fee_estimate().await.unwrap();
        assert_eq!(estimate.priority_bucket.feerate, 2.5);

        let oracle_view = api.current_fee_estimate().await.unwrap();
        assert_eq!(oracle_view.priority_feerate, 2.5);
    }

    #[tokio::test]
    async fn surfaces_error_status_with_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/transactions/missing")
            .with_status(404)
            .with_body("Transaction not found")
            .create_async()
            .await;

        let api = KaspaApi::with_base_url(server.url());
        let err = api.transaction("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error 404: Transaction not found");
    }
}
