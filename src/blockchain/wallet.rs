//! Signing identities.
//!
//! # Security
//! - Keys are never logged or serialized
//! - `Debug` shows only the derived address

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::Signer;
use std::sync::Arc;

use crate::blockchain::provider::ProviderHandle;
use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// A private key bound to one provider.
#[derive(Clone)]
pub struct Wallet {
    signer: PrivateKeySigner,
    provider: ProviderHandle,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// Accepts the key with or without a `0x` prefix.
    pub fn from_private_key(private_key_hex: &str, provider: &ProviderHandle) -> BlockchainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| BlockchainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::debug!(address = %signer.address(), "Wallet initialized");

        Ok(Self {
            signer,
            provider: provider.clone(),
        })
    }

    /// Get the wallet's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Lowercase `0x`-prefixed address, used as the helper mapping key.
    pub fn address_key(&self) -> String {
        self.address().to_string().to_lowercase()
    }

    /// Provider this wallet is bound to.
    pub fn provider(&self) -> &ProviderHandle {
        &self.provider
    }

    /// Build a provider that signs outgoing transactions with this wallet.
    pub fn signing_provider(&self) -> Arc<dyn Provider + Send + Sync> {
        let wallet = EthereumWallet::from(self.signer.clone());
        Arc::new(
            ProviderBuilder::new()
                .wallet(wallet)
                .connect_http(self.provider.endpoint().clone()),
        )
    }

    /// Sign arbitrary message bytes (with Ethereum prefix).
    pub async fn sign_message(&self, message: &[u8]) -> BlockchainResult<alloy::signers::Signature> {
        self.signer
            .sign_message(message)
            .await
            .map_err(|e| BlockchainError::Wallet(format!("Message signing failed: {}", e)))
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("address", &self.address())
            .field("provider", &self.provider.strategy().kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::provider::{ProviderStrategy, L1_LOCAL_RPC_URL};

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";

    fn local_provider() -> ProviderHandle {
        ProviderHandle::new(ProviderStrategy::Local {
            url: L1_LOCAL_RPC_URL,
        })
        .unwrap()
    }

    #[test]
    fn test_wallet_from_private_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, &local_provider()).unwrap();
        assert_eq!(wallet.address_key(), TEST_ADDRESS);
    }

    #[test]
    fn test_wallet_with_0x_prefix() {
        let wallet =
            Wallet::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY), &local_provider()).unwrap();
        assert_eq!(wallet.address_key(), TEST_ADDRESS);
    }

    #[test]
    fn test_invalid_private_key() {
        let result = Wallet::from_private_key("invalid_key", &local_provider());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid private key"));
    }

    #[test]
    fn test_wallet_is_bound_to_provider() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, &local_provider()).unwrap();
        assert_eq!(wallet.provider().endpoint().as_str(), "http://localhost:9545/");
    }

    #[test]
    fn test_debug_hides_key() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, &local_provider()).unwrap();
        let rendered = format!("{:?}", wallet);
        assert!(!rendered.contains(TEST_PRIVATE_KEY));
    }

    #[test]
    fn test_signing_provider_is_lazy() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, &local_provider()).unwrap();
        // Nothing listens on the local endpoint; building must not connect.
        let _provider = wallet.signing_provider();
    }

    #[tokio::test]
    async fn test_sign_message() {
        let wallet = Wallet::from_private_key(TEST_PRIVATE_KEY, &local_provider()).unwrap();
        let signature = wallet.sign_message(b"Hello, World!").await.unwrap();
        // Signature should be 65 bytes (r, s, v)
        assert_eq!(signature.as_bytes().len(), 65);
    }
}
