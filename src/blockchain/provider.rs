//! Network provider resolution.
//!
//! # Responsibilities
//! - Map per-layer selector strings onto a closed set of strategies
//! - Turn a strategy into an endpoint URL
//! - Build a lazy JSON-RPC client for that endpoint
//!
//! Building a handle performs no network I/O. The only call that reaches
//! the node is [`ProviderHandle::verify_chain_id`].

use alloy::providers::{Provider, ProviderBuilder};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId, Network};

/// Fixed development endpoint for layer 1.
pub const L1_LOCAL_RPC_URL: &str = "http://localhost:9545";

/// Fixed development endpoint for layer 2.
pub const L2_LOCAL_RPC_URL: &str = "http://localhost:8545";

/// Layer-1 provider selector (`PROVIDER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum L1Selector {
    Infura,
    Local,
    /// Any other value, including typos.
    Rpc,
}

impl L1Selector {
    /// Exact, case-sensitive match. Unrecognized values select [`L1Selector::Rpc`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "infura" => Self::Infura,
            "local" => Self::Local,
            _ => Self::Rpc,
        }
    }
}

/// Layer-2 provider selector (`L2_PROVIDER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum L2Selector {
    Local,
    Rpc,
}

impl L2Selector {
    /// Exact, case-sensitive match. Unrecognized values select [`L2Selector::Rpc`].
    pub fn parse(raw: &str) -> Self {
        match raw {
            "local" => Self::Local,
            _ => Self::Rpc,
        }
    }
}

/// How a provider reaches its node.
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderStrategy {
    /// Hosted infrastructure, addressed by network name and project key.
    Infura { network: String, project_key: String },
    /// Fixed local development endpoint.
    Local { url: &'static str },
    /// Arbitrary JSON-RPC endpoint, optionally pinned to a named network.
    /// A named network must be one of the known networks.
    Rpc { url: Url, network: Option<String> },
}

impl ProviderStrategy {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Infura { .. } => "infura",
            Self::Local { .. } => "local",
            Self::Rpc { .. } => "rpc",
        }
    }

    /// Network name this strategy is bound to, if any.
    pub fn network(&self) -> Option<&str> {
        match self {
            Self::Infura { network, .. } => Some(network),
            Self::Local { .. } => None,
            Self::Rpc { network, .. } => network.as_deref(),
        }
    }

    /// Resolve the endpoint URL.
    pub fn endpoint(&self) -> BlockchainResult<Url> {
        match self {
            Self::Infura { network, project_key } => {
                let net = Network::by_name(network)
                    .ok_or_else(|| BlockchainError::UnsupportedNetwork(network.clone()))?;
                // The project key is part of the path; keep it out of the error text.
                format!("https://{}.infura.io/v3/{}", net.infura_host, project_key)
                    .parse()
                    .map_err(|e| BlockchainError::Rpc(format!("Invalid Infura endpoint: {}", e)))
            }
            Self::Local { url } => url
                .parse()
                .map_err(|e| BlockchainError::Rpc(format!("Invalid local endpoint {}: {}", url, e))),
            Self::Rpc { url, network } => {
                if let Some(name) = network {
                    Network::by_name(name)
                        .ok_or_else(|| BlockchainError::UnsupportedNetwork(name.clone()))?;
                }
                Ok(url.clone())
            }
        }
    }

    /// Chain ID the node should report, when the network is known.
    pub fn expected_chain_id(&self) -> Option<ChainId> {
        self.network().and_then(Network::by_name).map(|n| n.chain_id)
    }
}

impl std::fmt::Debug for ProviderStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Infura { network, .. } => f
                .debug_struct("Infura")
                .field("network", network)
                .field("project_key", &"<redacted>")
                .finish(),
            Self::Local { url } => f.debug_struct("Local").field("url", url).finish(),
            // RPC URLs often carry an API key in the path or query.
            Self::Rpc { url, network } => f
                .debug_struct("Rpc")
                .field("host", &url.host_str())
                .field("network", network)
                .finish(),
        }
    }
}

/// Lazy JSON-RPC client bound to one strategy.
#[derive(Clone)]
pub struct ProviderHandle {
    strategy: ProviderStrategy,
    endpoint: Url,
    provider: Arc<dyn Provider + Send + Sync>,
}

impl ProviderHandle {
    /// Build a handle for the given strategy.
    pub fn new(strategy: ProviderStrategy) -> BlockchainResult<Self> {
        let endpoint = strategy.endpoint()?;
        let provider = Arc::new(ProviderBuilder::new().connect_http(endpoint.clone()))
            as Arc<dyn Provider + Send + Sync>;

        tracing::debug!(
            strategy = strategy.kind(),
            network = strategy.network().unwrap_or("-"),
            "Provider handle created"
        );

        Ok(Self {
            strategy,
            endpoint,
            provider,
        })
    }

    /// Strategy this handle was built from.
    pub fn strategy(&self) -> &ProviderStrategy {
        &self.strategy
    }

    /// Endpoint URL. For hosted providers this contains the project key.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &(dyn Provider + Send + Sync) {
        self.provider.as_ref()
    }

    /// Query the chain ID from the node.
    pub async fn get_chain_id(&self, wait: Duration) -> BlockchainResult<ChainId> {
        match timeout(wait, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(ChainId(id)),
            Ok(Err(e)) => Err(BlockchainError::Rpc(e.to_string())),
            Err(_) => Err(BlockchainError::Timeout(wait.as_secs())),
        }
    }

    /// Verify the node answers and, for known networks, reports the expected chain ID.
    pub async fn verify_chain_id(&self, wait: Duration) -> BlockchainResult<ChainId> {
        let actual = self.get_chain_id(wait).await?;
        if let Some(expected) = self.strategy.expected_chain_id() {
            if expected != actual {
                return Err(BlockchainError::ChainMismatch {
                    expected: expected.0,
                    actual: actual.0,
                });
            }
        }
        Ok(actual)
    }
}

impl std::fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("strategy", &self.strategy)
            .finish()
    }
}
