//! Chain-specific types and error definitions.

use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

/// A named Ethereum network the hosted provider knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Network {
    /// Canonical name (`homestead` is reported as `mainnet`).
    pub name: &'static str,
    /// Subdomain used by the hosted-infrastructure endpoint.
    pub infura_host: &'static str,
    /// Expected chain ID.
    pub chain_id: ChainId,
}

const NETWORKS: &[Network] = &[
    Network { name: "mainnet", infura_host: "mainnet", chain_id: ChainId(1) },
    Network { name: "ropsten", infura_host: "ropsten", chain_id: ChainId(3) },
    Network { name: "rinkeby", infura_host: "rinkeby", chain_id: ChainId(4) },
    Network { name: "goerli", infura_host: "goerli", chain_id: ChainId(5) },
    Network { name: "kovan", infura_host: "kovan", chain_id: ChainId(42) },
    Network { name: "sepolia", infura_host: "sepolia", chain_id: ChainId(11_155_111) },
];

impl Network {
    /// Look up a network by name. `homestead` is an alias for `mainnet`.
    pub fn by_name(name: &str) -> Option<Network> {
        let name = if name == "homestead" { "mainnet" } else { name };
        NETWORKS.iter().copied().find(|n| n.name == name)
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Network name the hosted provider cannot serve.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// Chain configuration mismatch.
    #[error("Chain ID mismatch: expected {expected}, got {actual}")]
    ChainMismatch { expected: u64, actual: u64 },
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
