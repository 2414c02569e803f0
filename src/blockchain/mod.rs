//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! Environment snapshot (selector, network, RPC URL, private keys)
//!     → provider.rs (strategy → lazy JSON-RPC handle)
//!     → wallet.rs (private key → signing identity bound to the handle)
//!     → helpers.rs (identities keyed by lowercase address)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or hosted-provider project keys
//! - Handles are lazy: nothing here touches the network except
//!   `ProviderHandle::verify_chain_id`

pub mod helpers;
pub mod provider;
pub mod types;
pub mod wallet;

pub use helpers::HelperWallets;
pub use provider::{ProviderHandle, ProviderStrategy};
pub use types::{BlockchainError, ChainId, Network};
pub use wallet::Wallet;
