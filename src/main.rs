//! POAP backend configuration checker.
//!
//! Resolves the backend configuration exactly as the server would at
//! startup and prints a redacted view of it. Exits non-zero on the first
//! missing or invalid variable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use poap_config::config::{ConfigError, Env, Layer, LoadParams};
use poap_config::lifecycle::startup::{exit_on_config_error, load_or_exit, CONFIG_EXIT_CODE};
use poap_config::observability::{init_logging, LogFormat};

/// Default `.env` location, read only when present.
const DEFAULT_ENV_FILE: &str = ".env";

const LOG_FORMAT: &str = "LOG_FORMAT";
const RUST_LOG: &str = "RUST_LOG";

/// Chain-id probe timeout for `--verify`.
const VERIFY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "poap-config")]
#[command(version, about = "Validate and print the POAP backend configuration", long_about = None)]
struct Args {
    /// Network layer to resolve (layer1, layer2)
    #[arg(long, env = "POAP_LAYER", default_value = "layer1")]
    layer: Layer,

    /// `.env` file to read; process variables take precedence.
    /// `RUST_LOG` and `LOG_FORMAT` set there also apply.
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Query the provider's chain ID after loading
    #[arg(long)]
    verify: bool,

    /// Log format (pretty, json) [default: pretty]
    #[arg(long)]
    log_format: Option<LogFormat>,
}

fn env_file_path(env_file: Option<&Path>) -> Option<&Path> {
    match env_file {
        Some(path) => Some(path),
        None if Path::new(DEFAULT_ENV_FILE).exists() => Some(Path::new(DEFAULT_ENV_FILE)),
        None => None,
    }
}

/// Process variables merged over the `.env` file, if any.
fn build_env(path: Option<&Path>) -> Result<Env, ConfigError> {
    let process = Env::from_process();
    match path {
        Some(path) => Ok(process.or_else(Env::from_file(path)?)),
        None => Ok(process),
    }
}

/// `--log-format` wins, then `LOG_FORMAT`, then pretty.
fn log_format(flag: Option<LogFormat>, env: &Env) -> LogFormat {
    flag.or_else(|| env.get(LOG_FORMAT).and_then(|raw| raw.parse().ok()))
        .unwrap_or_default()
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // The env file is read before logging so its RUST_LOG and LOG_FORMAT apply.
    let path = env_file_path(args.env_file.as_deref());
    let env = build_env(path);

    let process;
    let log_env = match &env {
        Ok(merged) => merged,
        Err(_) => {
            process = Env::from_process();
            &process
        }
    };
    let format = log_format(args.log_format, log_env);
    if let Err(e) = init_logging(format, log_env.get(RUST_LOG)) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), layer = %args.layer, "poap-config starting");
    if let (Some(path), Ok(_)) = (path, &env) {
        tracing::info!(path = %path.display(), "Read env file");
    }

    let env = env.unwrap_or_else(|e| exit_on_config_error(&e));
    let config = load_or_exit(&env, LoadParams::with_layer(args.layer));

    println!("{:#?}", config);

    if args.verify {
        match config.provider.verify_chain_id(VERIFY_TIMEOUT).await {
            Ok(chain_id) => {
                tracing::info!(chain_id = chain_id.0, "Provider reachable");
            }
            Err(e) => {
                tracing::error!(error = %e, "Provider verification failed");
                std::process::exit(CONFIG_EXIT_CODE);
            }
        }
    }
}
