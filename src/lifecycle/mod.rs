//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Build Env → load_config → PoapConfig, or log + exit(1)
//! ```

pub mod startup;

pub use startup::load_or_exit;
