//! Report the wallet's receive address

use serde::Serialize;

use crate::sender::WalletSource;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GetMyAddressResult {
    pub address: String,
}

pub fn get_my_address(wallet: &dyn WalletSource) -> GetMyAddressResult {
    GetMyAddressResult {
        address: wallet.address().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NetworkId;
    use crate::wallet::{KaspaWallet, SigningKey};

    #[test]
    fn returns_wallet_address() {
        let key = SigningKey::from_hex(&"02".repeat(32)).unwrap();
        let wallet = KaspaWallet::new(
            "kaspa:qq2efzv5g573dsmcrah2".to_string(),
            NetworkId::Mainnet,
            key,
        )
        .unwrap();
        let result = get_my_address(&wallet);
        assert_eq!(result.address, "kaspa:qq2efzv5g573dsmcrah2");
    }
}
