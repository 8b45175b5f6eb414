//! Transaction status and details

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::api::KaspaApi;
use crate::types::sompi_to_kas;

#[derive(Debug, Clone, Deserialize)]
pub struct GetTransactionParams {
    pub tx_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    pub transaction_id: String,
    pub index: u32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOutput {
    pub index: usize,
    /// Amount in KAS
    pub amount: String,
    pub address: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetTransactionResult {
    pub tx_id: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_time: Option<i64>,
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
}

pub async fn get_transaction(
    params: GetTransactionParams,
    api: &KaspaApi,
) -> Result<GetTransactionResult> {
    if params.tx_id.is_empty() {
        return Err(anyhow!("transaction id (tx_id) is required"));
    }

    let tx = match api.transaction(&params.tx_id).await {
        Ok(tx) => tx,
        Err(e) if e.is_not_found() => {
            return Err(anyhow!("transaction not found: {}", params.tx_id))
        }
        Err(e) => return Err(e.into()),
    };

    let inputs = tx
        .inputs
        .iter()
        .map(|input| TransactionInput {
            transaction_id: input.previous_outpoint_hash.clone(),
            index: input.previous_outpoint_index.parse().unwrap_or(0),
        })
        .collect();

    let outputs = tx
        .outputs
        .iter()
        .enumerate()
        .map(|(index, output)| TransactionOutput {
            index,
            amount: sompi_to_kas(output.amount.parse().unwrap_or(0)),
            address: output.script_public_key_address.clone(),
        })
        .collect();

    Ok(GetTransactionResult {
        tx_id: tx.transaction_id,
        accepted: tx.is_accepted,
        block_hash: tx.block_hash.first().cloned(),
        block_time: tx.block_time,
        inputs,
        outputs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn maps_transaction_details() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/transactions/deadbeef")
            .with_status(200)
            .with_body(
                r#"{
                    "transaction_id": "deadbeef",
                    "block_hash": ["aa", "bb"],
                    "block_time": 1700000000,
                    "is_accepted": true,
                    "inputs": [{
                        "previous_outpoint_hash": "cafe",
                        "previous_outpoint_index": "1"
                    }],
                    "outputs": [{
                        "amount": "150000000",
                        "script_public_key_address": "kaspa:qq2efzv5g573dsmcrah2"
                    }]
                }"#,
            )
            .create_async()
            .await;

        let api = crate::api::KaspaApi::with_base_url(server.url());
        let result = get_transaction(
            GetTransactionParams {
                tx_id: "deadbeef".to_string(),
            },
            &api,
        )
        .await
        .unwrap();

        assert_eq!(result.tx_id, "deadbeef");
        assert!(result.accepted);
        assert_eq!(result.block_hash.as_deref(), Some("aa"));
        assert_eq!(result.block_time, Some(1700000000));
        assert_eq!(
            result.inputs,
            [TransactionInput {
                transaction_id: "cafe".to_string(),
                index: 1
            }]
        );
        assert_eq!(
            result.outputs,
            [TransactionOutput {
                index: 0,
                amount: "1.5".to_string(),
                address: "kaspa:qq2efzv5g573dsmcrah2".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/transactions/missing")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let api = crate::api::KaspaApi::with_base_url(server.url());
        let err = get_transaction(
            GetTransactionParams {
                tx_id: "missing".to_string(),
            },
            &api,
        )
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "transaction not found: missing");
    }

    #[tokio::test]
    async fn requires_tx_id() {
        let api = crate::api::KaspaApi::with_base_url("http://unused.invalid");
        let err = get_transaction(
            GetTransactionParams {
                tx_id: String::new(),
            },
            &api,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("required"));
    }
}
