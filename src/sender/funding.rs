//! Funding sufficiency check and UTXO ordering policy

use super::errors::SenderError;
use super::sources::{FeeOracle, FundingEntry};
use crate::types::Kas;

/// Verify that the available outputs cover the requested amount plus a
/// projected fee margin plus the explicit priority fee.
///
/// The projection is `ceil(top_feerate * fee_mass)` with `fee_mass`
/// modelling a typical transaction's mass (config default 3000). It is a
/// point-in-time estimate, not a guarantee; the generator determines the
/// actual fee later. The check exists to fail fast before any signing
/// round-trip.
///
/// Returns the total available balance in sompi on success.
pub async fn assure_funds(
    entries: &[FundingEntry],
    amount: u64,
    priority_fee: u64,
    oracle: &dyn FeeOracle,
    fee_mass: u64,
) -> Result<u64, SenderError> {
    if entries.is_empty() {
        return Err(SenderError::NoFundingEntries);
    }

    let total_available = entries
        .iter()
        .fold(0u64, |sum, e| sum.saturating_add(e.amount));

    let estimate = oracle.current_fee_estimate().await?;
    let estimated_fee = (estimate.priority_feerate * fee_mass as f64).ceil() as u64;
    let total_required = amount
        .saturating_add(estimated_fee)
        .saturating_add(priority_fee);

    if total_available < total_required {
        return Err(SenderError::InsufficientFunds {
            available: Kas(total_available),
            required: Kas(total_required),
        });
    }
    Ok(total_available)
}

/// Sort entries ascending by amount before they reach the generator.
///
/// Smallest-first selection consolidates many small outputs, trading a
/// possibly larger input count per transaction for less future
/// fragmentation. The generator's splitting algorithm relies on this
/// canonical order; raw provider order must never be passed through.
pub fn sort_entries(entries: &mut [FundingEntry]) {
    entries.sort_by_key(|e| e.amount);
}
