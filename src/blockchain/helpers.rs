//! Helper wallet set, keyed by lowercase address.

use std::collections::BTreeMap;

use crate::blockchain::wallet::Wallet;

/// Signing identities available for delegated signing.
#[derive(Debug, Clone, Default)]
pub struct HelperWallets {
    wallets: BTreeMap<String, Wallet>,
}

impl HelperWallets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert under the wallet's lowercase address. A later insert for the
    /// same address replaces the earlier one.
    pub fn insert(&mut self, wallet: Wallet) {
        self.wallets.insert(wallet.address_key(), wallet);
    }

    /// Look up a wallet by address, in any letter case.
    pub fn get(&self, address: &str) -> Option<&Wallet> {
        self.wallets.get(&address.to_lowercase())
    }

    pub fn contains(&self, address: &str) -> bool {
        self.get(address).is_some()
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Lowercase addresses in sorted order.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.wallets.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Wallet)> {
        self.wallets.iter().map(|(k, v)| (k.as_str(), v))
    }
}
