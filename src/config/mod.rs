//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment / .env file / literal pairs
//!     → env.rs (read-only Env snapshot)
//!     → loader.rs (require, resolve provider, derive wallets)
//!     → PoapConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Loading never exits the process; it returns the first `ConfigError`
//! - A miss on a required variable is logged with its name
//! - Only the variables of the selected layer and provider branch are read

pub mod env;
pub mod layer;
pub mod loader;
pub mod schema;
pub mod vars;

pub use env::Env;
pub use layer::{Layer, LoadParams};
pub use loader::{build_helper_wallets, load_config, resolve_provider, ConfigError};
pub use schema::PoapConfig;
