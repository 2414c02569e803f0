//! Startup orchestration.
//!
//! # Design Decisions
//! - Fail fast: any configuration error is fatal
//! - This is the only place a `ConfigError` turns into a process exit

use crate::config::{load_config, ConfigError, Env, LoadParams, PoapConfig};

/// Exit status used when configuration is rejected.
pub const CONFIG_EXIT_CODE: i32 = 1;

/// Load the configuration or terminate the process.
pub fn load_or_exit(env: &Env, params: LoadParams) -> PoapConfig {
    match load_config(env, params) {
        Ok(config) => config,
        Err(e) => exit_on_config_error(&e),
    }
}

/// Log the error and exit with [`CONFIG_EXIT_CODE`].
pub fn exit_on_config_error(error: &ConfigError) -> ! {
    tracing::error!(error = %error, "Configuration rejected, refusing to start");
    std::process::exit(CONFIG_EXIT_CODE)
}
