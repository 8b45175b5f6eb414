//! Current network fee estimates

use anyhow::Result;
use serde::Serialize;

use crate::api::KaspaApi;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GetFeeEstimateResult {
    /// Feerates in sompi per mass unit, as strings
    pub priority_fee: String,
    pub normal_fee: String,
    pub low_fee: String,
}

pub async fn get_fee_estimate(api: &KaspaApi) -> Result<GetFeeEstimateResult> {
    let estimate = api.fee_estimate().await?;
    let first = |buckets: &[crate::types::FeeBucket]| {
        buckets
            .first()
            .map(|b| b.feerate.to_string())
            .unwrap_or_else(|| "0".to_string())
    };

    Ok(GetFeeEstimateResult {
        priority_fee: estimate.priority_bucket.feerate.to_string(),
        normal_fee: first(&estimate.normal_buckets),
        low_fee: first(&estimate.low_buckets),
    })
}
