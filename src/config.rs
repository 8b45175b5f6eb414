//! Configuration module for the Kaspa tool adapter
//!
//! Handles configuration loading from TOML files with environment
//! variable overrides. Key material never lives in the config file; it
//! is read from the environment by the wallet module.

use serde::{Deserialize, Serialize};

use crate::types::NetworkId;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Network to operate on
    #[serde(default)]
    pub network: NetworkId,

    /// Wallet configuration
    #[serde(default)]
    pub wallet: WalletConfig,

    /// Node connection configuration
    #[serde(default)]
    pub node: NodeConfig,

    /// Fee projection configuration
    #[serde(default)]
    pub fee: FeeConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Wallet receive address. Overridden by KASPA_ADDRESS when set.
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Hard cap on connection establishment, in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeConfig {
    /// Mass units assumed for a typical transaction when projecting a
    /// worst-case fee from the top feerate bucket. A heuristic, not a
    /// protocol-weight formula.
    #[serde(default = "default_estimate_mass")]
    pub estimate_mass: u64,
}

fn default_connect_timeout() -> u64 {
    30
}
fn default_estimate_mass() -> u64 {
    3000
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self {
            estimate_mass: default_estimate_mass(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkId::default(),
            wallet: WalletConfig::default(),
            node: NodeConfig::default(),
            fee: FeeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    ///
    /// Reads `.env` if present, then lets KASPA_NETWORK and KASPA_ADDRESS
    /// override the file values.
    pub fn from_file_with_env(path: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::from_file(path)?;
        config.apply_env()?;
        Ok(config)
    }

    pub(crate) fn apply_env(&mut self) -> anyhow::Result<()> {
        if let Ok(network) = std::env::var("KASPA_NETWORK") {
            self.network = network.parse()?;
        }
        if let Ok(address) = std::env::var("KASPA_ADDRESS") {
            self.wallet.address = Some(address);
        }
        Ok(())
    }
}
