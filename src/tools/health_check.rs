//! Pre-flight health check: wallet config, address, API connectivity

use serde::Serialize;

use crate::api::KaspaApi;
use crate::config::Config;
use crate::types::Address;
use crate::wallet::KaspaWallet;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckOutcome {
    fn ok() -> Self {
        Self {
            ok: true,
            ..Self::default()
        }
    }

    fn failed(error: impl ToString) -> Self {
        Self {
            ok: false,
            address: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct HealthChecks {
    pub wallet: CheckOutcome,
    pub address: CheckOutcome,
    pub api: CheckOutcome,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub checks: HealthChecks,
    pub network: String,
    pub version: String,
}

/// Health check against the process-wide wallet and API client.
pub async fn health_check(config: &Config) -> HealthCheckResult {
    match crate::wallet::global(config) {
        Ok(wallet) => {
            let api = crate::api::for_network(wallet.network_id());
            run_checks(wallet, &api).await
        }
        Err(e) => HealthCheckResult {
            status: HealthStatus::Unhealthy,
            checks: HealthChecks {
                wallet: CheckOutcome::failed(e),
                ..HealthChecks::default()
            },
            network: "unknown".to_string(),
            version: VERSION.to_string(),
        },
    }
}

pub(crate) async fn run_checks(wallet: &KaspaWallet, api: &KaspaApi) -> HealthCheckResult {
    let mut checks = HealthChecks {
        wallet: CheckOutcome::ok(),
        ..HealthChecks::default()
    };

    checks.address = match Address::parse(wallet.address()) {
        Ok(_) => CheckOutcome {
            ok: true,
            address: Some(wallet.address().to_string()),
            error: None,
        },
        Err(e) => CheckOutcome::failed(e),
    };

    checks.api = match api.fee_estimate().await {
        Ok(_) => CheckOutcome::ok(),
        Err(e) => CheckOutcome::failed(e),
    };

    let status = if !checks.wallet.ok || !checks.address.ok {
        HealthStatus::Unhealthy
    } else if !checks.api.ok {
        HealthStatus::Degraded
    } else {
        HealthStatus::Healthy
    };

    HealthCheckResult {
        status,
        checks,
        network: wallet.network_id().to_string(),
        version: VERSION.to_string(),
    }
}
