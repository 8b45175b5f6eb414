//! Wallet identity: address, network, and an opaque signing key handle
//!
//! Key derivation and address encoding are the wallet SDK's job; this
//! module only carries the derived material the submission pipeline needs
//! and guards the process-wide wallet singleton.

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::Config;
use crate::sender::WalletSource;
use crate::types::{Address, NetworkId};

/// Environment variable holding the 32-byte private key as hex.
pub const PRIVATE_KEY_ENV: &str = "KASPA_PRIVATE_KEY";

/// Opaque signing key handle, zeroed on drop.
///
/// The pipeline never interprets these bytes; they are handed to the
/// external signer as-is.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey([u8; 32]);

impl SigningKey {
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let bytes = hex::decode(hex_key.trim()).context("private key is not valid hex")?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| anyhow::anyhow!("invalid key length: expected 32 bytes, got {}", b.len()))?;
        if bytes.iter().all(|&b| b == 0) {
            anyhow::bail!("invalid key: all-zero key rejected");
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SigningKey(..)")
    }
}

/// Wallet handle used by the tool layer and the submission pipeline
#[derive(Debug, Clone)]
pub struct KaspaWallet {
    address: String,
    network: NetworkId,
    key: SigningKey,
}

impl KaspaWallet {
    pub fn new(address: String, network: NetworkId, key: SigningKey) -> Result<Self> {
        let parsed = Address::parse(&address)?;
        if !parsed.matches_network(network) {
            anyhow::bail!(
                "wallet address {} does not belong to network {}",
                address,
                network
            );
        }
        Ok(Self {
            address,
            network,
            key,
        })
    }

    /// Build the wallet from config plus the KASPA_PRIVATE_KEY environment
    /// variable.
    pub fn from_env(config: &Config) -> Result<Self> {
        let hex_key = std::env::var(PRIVATE_KEY_ENV)
            .with_context(|| format!("{PRIVATE_KEY_ENV} environment variable must be set"))?;
        let key = SigningKey::from_hex(&hex_key)?;
        let address = config
            .wallet
            .address
            .clone()
            .context("wallet address must be set in config or KASPA_ADDRESS")?;
        Self::new(address, config.network, key)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn network_id(&self) -> NetworkId {
        self.network
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.key
    }
}

impl WalletSource for KaspaWallet {
    fn address(&self) -> &str {
        &self.address
    }

    fn network_id(&self) -> NetworkId {
        self.network
    }

    fn signing_key(&self) -> &SigningKey {
        &self.key
    }
}

static WALLET: OnceCell<KaspaWallet> = OnceCell::new();

/// Process-wide wallet, lazily initialized on first use.
///
/// The OnceCell guarantees single initialization even when tool calls
/// race on separate runtime threads.
pub fn global(config: &Config) -> Result<&'static KaspaWallet> {
    WALLET.get_or_try_init(|| KaspaWallet::from_env(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "0101010101010101010101010101010101010101010101010101010101010101";
    const MAINNET_ADDR: &str = "kaspa:qq2efzv5g573dsmcrah2xyrgr6daahq4rskleydk";

    #[test]
    fn signing_key_from_hex() {
        let key = SigningKey::from_hex(KEY_HEX).unwrap();
        assert_eq!(key.as_bytes()[0], 1);
    }

    #[test]
    fn signing_key_rejects_bad_input() {
        assert!(SigningKey::from_hex("not-hex").is_err());
        assert!(SigningKey::from_hex("0101").is_err());
        let all_zero = "00".repeat(32);
        assert!(SigningKey::from_hex(&all_zero).is_err());
    }

    #[test]
    fn signing_key_debug_is_redacted() {
        let key = SigningKey::from_hex(KEY_HEX).unwrap();
        assert_eq!(format!("{key:?}"), "SigningKey(..)");
    }

    #[test]
    fn wallet_accessors() {
        let key = SigningKey::from_hex(KEY_HEX).unwrap();
        let wallet = KaspaWallet::new(MAINNET_ADDR.to_string(), NetworkId::Mainnet, key).unwrap();
        assert_eq!(wallet.address(), MAINNET_ADDR);
        assert_eq!(wallet.network_id(), NetworkId::Mainnet);
    }

    #[test]
    fn wallet_rejects_network_mismatch() {
        let key = SigningKey::from_hex(KEY_HEX).unwrap();
        assert!(KaspaWallet::new(MAINNET_ADDR.to_string(), NetworkId::Testnet10, key).is_err());
    }

    #[test]
    fn wallet_from_env() {
        let mut config = Config::default();
        config.wallet.address = Some(MAINNET_ADDR.to_string());

        // No key in the environment
        std::env::remove_var(PRIVATE_KEY_ENV);
        assert!(KaspaWallet::from_env(&config).is_err());

        std::env::set_var(PRIVATE_KEY_ENV, KEY_HEX);
        let wallet = KaspaWallet::from_env(&config).unwrap();
        assert_eq!(wallet.address(), MAINNET_ADDR);
        std::env::remove_var(PRIVATE_KEY_ENV);
    }
}
