//! Observability subsystem.
//!
//! Logging only: every subsystem emits `tracing` events, `logging.rs`
//! decides where they go.

pub mod logging;

pub use logging::{init_logging, LogFormat};
