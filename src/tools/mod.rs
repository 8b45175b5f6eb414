//! Remote-callable wallet tools
//!
//! One module per tool, mirroring the adapter's external surface:
//! address lookup, balance, fee estimate, transaction status, mnemonic
//! generation, health check, and send. Each tool takes its collaborators
//! explicitly; process wiring happens in the binary.

pub mod generate_mnemonic;
pub mod get_balance;
pub mod get_fee_estimate;
pub mod get_my_address;
pub mod get_transaction;
pub mod health_check;
pub mod send;

pub use generate_mnemonic::{generate_mnemonic, GenerateMnemonicParams, GenerateMnemonicResult};
pub use get_balance::{get_balance, GetBalanceParams, GetBalanceResult};
pub use get_fee_estimate::{get_fee_estimate, GetFeeEstimateResult};
pub use get_my_address::{get_my_address, GetMyAddressResult};
pub use get_transaction::{get_transaction, GetTransactionParams, GetTransactionResult};
pub use health_check::{health_check, HealthCheckResult, HealthStatus};
pub use send::{send, SendParams, SendResult};
