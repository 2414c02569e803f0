//! Configuration loading from an environment snapshot.

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::blockchain::provider::{L1Selector, L2Selector, L1_LOCAL_RPC_URL, L2_LOCAL_RPC_URL};
use crate::blockchain::{BlockchainError, HelperWallets, ProviderHandle, ProviderStrategy, Wallet};
use crate::config::env::Env;
use crate::config::layer::{Layer, LoadParams};
use crate::config::schema::{
    Auth0Config, AwsConfig, EmailConfig, PoapConfig, Secret, SubgraphConfig, SwaggerConfig,
};
use crate::config::vars;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable absent or empty.
    #[error("ENV variable {0} is required")]
    MissingVariable(&'static str),

    /// Variable expected to hold JSON does not parse.
    #[error("ENV variable {name} is not valid JSON: {source}")]
    MalformedJson {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A private key could not be turned into a signing identity.
    #[error("ENV variable {name} holds an invalid private key: {source}")]
    InvalidCredential {
        name: &'static str,
        #[source]
        source: BlockchainError,
    },

    /// Variable expected to hold a URL does not parse.
    #[error("ENV variable {name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// Provider handle could not be built.
    #[error(transparent)]
    Blockchain(#[from] BlockchainError),

    /// `.env` file could not be read or parsed.
    #[error("Failed to read env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

fn require_url(env: &Env, name: &'static str) -> Result<Url, ConfigError> {
    env.require(name)?
        .parse()
        .map_err(|source| ConfigError::InvalidUrl { name, source })
}

/// Variable holding the provider selector for `layer`.
pub fn selector_variable(layer: Layer) -> &'static str {
    match layer {
        Layer::Layer1 => vars::PROVIDER,
        Layer::Layer2 => vars::L2_PROVIDER,
    }
}

/// Resolve the network provider for `layer`.
///
/// Each layer reads its own selector variable. Only the variables of the
/// chosen branch are required. A layer-1 network name must be a known network.
pub fn resolve_provider(env: &Env, layer: Layer) -> Result<ProviderHandle, ConfigError> {
    let strategy = match layer {
        Layer::Layer2 => match L2Selector::parse(&env.require(vars::L2_PROVIDER)?) {
            L2Selector::Local => ProviderStrategy::Local {
                url: L2_LOCAL_RPC_URL,
            },
            L2Selector::Rpc => ProviderStrategy::Rpc {
                url: require_url(env, vars::L2_PROVIDER_RPC_URL)?,
                network: None,
            },
        },
        Layer::Layer1 => match L1Selector::parse(&env.require(vars::PROVIDER)?) {
            L1Selector::Infura => ProviderStrategy::Infura {
                network: env.require(vars::ETH_NETWORK)?,
                project_key: env.require(vars::INFURA_PK)?,
            },
            L1Selector::Local => ProviderStrategy::Local {
                url: L1_LOCAL_RPC_URL,
            },
            L1Selector::Rpc => {
                let network = env.require(vars::ETH_NETWORK)?;
                let url = require_url(env, vars::PROVIDER_RPC_URL)?;
                ProviderStrategy::Rpc {
                    url,
                    network: Some(network),
                }
            }
        },
    };

    tracing::debug!(layer = %layer, strategy = strategy.kind(), "Resolved provider");
    Ok(ProviderHandle::new(strategy)?)
}

fn wallet_from_env(
    name: &'static str,
    key: &str,
    provider: &ProviderHandle,
) -> Result<Wallet, ConfigError> {
    Wallet::from_private_key(key, provider)
        .map_err(|source| ConfigError::InvalidCredential { name, source })
}

/// Derive the helper identities, administrator included.
pub fn build_helper_wallets(env: &Env, provider: &ProviderHandle) -> Result<HelperWallets, ConfigError> {
    let helper_keys = env.require(vars::POAP_HELPERS_PK)?;
    let owner_key = env.require(vars::POAP_OWNER_PK)?;

    let mut helpers = HelperWallets::new();
    helpers.insert(wallet_from_env(vars::POAP_OWNER_PK, &owner_key, provider)?);

    let keys: Vec<String> = serde_json::from_str(&helper_keys).map_err(|source| {
        ConfigError::MalformedJson {
            name: vars::POAP_HELPERS_PK,
            source,
        }
    })?;
    for key in &keys {
        helpers.insert(wallet_from_env(vars::POAP_HELPERS_PK, key, provider)?);
    }

    Ok(helpers)
}

/// Load and validate the full configuration.
///
/// Stops at the first missing or invalid variable.
pub fn load_config(env: &Env, params: LoadParams) -> Result<PoapConfig, ConfigError> {
    let layer = params.resolved_layer();
    let poap_address = match layer {
        Layer::Layer1 => env.require(vars::POAP_CONTRACT_ADDR)?,
        Layer::Layer2 => env.require(vars::L2_POAP_CONTRACT_ADDR)?,
    };

    let provider = resolve_provider(env, layer)?;
    let provider_selector = env.require(selector_variable(layer))?;
    let eth_network = provider.strategy().network().map(str::to_string);

    let owner_key = env.require(vars::POAP_OWNER_PK)?;
    let poap_admin = wallet_from_env(vars::POAP_OWNER_PK, &owner_key, &provider)?;
    let poap_vote_address = env.require(vars::POAP_VOTE_CONTRACT_ADDR)?;
    let poap_helpers = build_helper_wallets(env, &provider)?;

    let config = PoapConfig {
        layer,
        provider_selector,
        eth_network,
        poap_address,
        poap_vote_address,
        poap_admin,
        poap_helpers,
        secret_key: Secret::new(env.require(vars::SECRET_KEY)?),
        swagger: SwaggerConfig {
            host: env.require(vars::SWAGGER_HOST)?,
            url: env.require(vars::SWAGGER_URL)?,
        },
        auth0: Auth0Config {
            app_name: env.require(vars::AUTH0_APP_NAME)?,
            kid: env.require(vars::AUTH0_KID)?,
            audience: env.require(vars::AUTH0_AUDIENCE)?,
        },
        google_storage_bucket: env.require(vars::GOOGLE_STORAGE_BUCKET)?,
        email: EmailConfig {
            new_event_template: env.require(vars::NEW_EVENT_EMAIL_TEMPLATE)?,
            new_event_template_template: env.require(vars::NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE)?,
            redeem_tokens_template: env.require(vars::REDEEM_TOKENS_EMAIL_TEMPLATE)?,
            sender: env.require(vars::SENDER_EMAIL)?,
        },
        admin_emails: env.require_json(vars::ADMIN_EMAILS)?,
        aws: AwsConfig {
            region: env.require(vars::AWS_REGION)?,
            secret_access_key: Secret::new(env.require(vars::AWS_SECRET_ACCESS_KEY)?),
            access_key: env.require(vars::AWS_ACCESS_KEY)?,
        },
        subgraph: SubgraphConfig {
            l1_url: env.require(vars::L1_POAP_SUBGRAPH_URL)?,
            l2_url: env.require(vars::L2_POAP_SUBGRAPH_URL)?,
        },
        provider,
    };

    tracing::info!(
        layer = %config.layer,
        contract = %config.poap_address,
        provider = config.provider.strategy().kind(),
        admin = %config.poap_admin.address(),
        helpers = config.poap_helpers.len(),
        "Configuration loaded"
    );

    Ok(config)
}

impl PoapConfig {
    /// Load from a snapshot of the current process environment.
    pub fn from_process_env(params: LoadParams) -> Result<Self, ConfigError> {
        load_config(&Env::from_process(), params)
    }
}
