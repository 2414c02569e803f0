//! POAP backend configuration.
//!
//! Resolves the backend's environment into a typed, immutable
//! [`PoapConfig`]: network provider, signing identities, contract
//! addresses and service credentials.

pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod notifications;
pub mod observability;

pub use config::{load_config, ConfigError, Env, Layer, LoadParams, PoapConfig};
