//! Generate a fresh BIP39 mnemonic
//!
//! Key and address derivation from the phrase are the wallet SDK's job;
//! this tool only produces the entropy-backed phrase.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::types::NetworkId;

const WARNING: &str = "IMPORTANT: Save this mnemonic securely. It cannot be recovered if lost. \
                       Never share it with anyone.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateMnemonicParams {
    /// 12 or 24; defaults to 24
    pub word_count: Option<usize>,
    pub network: Option<NetworkId>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GenerateMnemonicResult {
    pub mnemonic: String,
    pub network: String,
    pub warning: String,
}

pub fn generate_mnemonic(params: GenerateMnemonicParams) -> Result<GenerateMnemonicResult> {
    let word_count = params.word_count.unwrap_or(24);
    if word_count != 12 && word_count != 24 {
        bail!("word count must be 12 or 24");
    }
    let network = params.network.unwrap_or_default();

    let mnemonic = bip39::Mnemonic::generate(word_count)?;

    Ok(GenerateMnemonicResult {
        mnemonic: mnemonic.to_string(),
        network: network.to_string(),
        warning: WARNING.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_24_words() {
        let result = generate_mnemonic(GenerateMnemonicParams::default()).unwrap();
        assert_eq!(result.mnemonic.split_whitespace().count(), 24);
        assert_eq!(result.network, "mainnet");
        assert!(result.warning.contains("Never share"));
    }

    #[test]
    fn supports_12_words() {
        let params = GenerateMnemonicParams {
            word_count: Some(12),
            network: Some(NetworkId::Testnet10),
        };
        let result = generate_mnemonic(params).unwrap();
        assert_eq!(result.mnemonic.split_whitespace().count(), 12);
        assert_eq!(result.network, "testnet-10");
    }

    #[test]
    fn rejects_other_word_counts() {
        let params = GenerateMnemonicParams {
            word_count: Some(15),
            network: None,
        };
        assert!(generate_mnemonic(params).is_err());
    }

    #[test]
    fn phrases_are_random() {
        let a = generate_mnemonic(GenerateMnemonicParams::default()).unwrap();
        let b = generate_mnemonic(GenerateMnemonicParams::default()).unwrap();
        assert_ne!(a.mnemonic, b.mnemonic);
    }
}
