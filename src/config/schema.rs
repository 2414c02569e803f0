//! Configuration record definitions.
//!
//! A [`PoapConfig`] is produced once per load and never mutated. Sections
//! holding credentials implement `Debug` by hand so secrets stay out of logs.

use crate::blockchain::{HelperWallets, ProviderHandle, Wallet};
use crate::config::layer::Layer;

/// Root configuration for the POAP backend.
#[derive(Debug, Clone)]
pub struct PoapConfig {
    /// Network handle for the selected layer.
    pub provider: ProviderHandle,

    /// Layer this record was resolved for.
    pub layer: Layer,

    /// Raw selector value (`PROVIDER` or `L2_PROVIDER`) the provider was chosen by.
    pub provider_selector: String,

    /// `ETH_NETWORK`, set only when the chosen provider branch read it.
    pub eth_network: Option<String>,

    /// Administrator signing identity.
    pub poap_admin: Wallet,

    /// POAP contract address for `layer`.
    pub poap_address: String,

    /// Vote contract address.
    pub poap_vote_address: String,

    /// Helper identities, administrator included.
    pub poap_helpers: HelperWallets,

    /// Application secret.
    pub secret_key: Secret,

    pub swagger: SwaggerConfig,

    pub auth0: Auth0Config,

    /// Cloud storage bucket name.
    pub google_storage_bucket: String,

    pub email: EmailConfig,

    /// Administrator email addresses, in configured order.
    pub admin_emails: Vec<String>,

    pub aws: AwsConfig,

    pub subgraph: SubgraphConfig,
}

/// API documentation location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwaggerConfig {
    pub host: String,
    pub url: String,
}

/// Auth0 application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auth0Config {
    pub app_name: String,
    pub kid: String,
    pub audience: String,
}

/// Outgoing email settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub new_event_template: String,
    pub new_event_template_template: String,
    pub redeem_tokens_template: String,
    pub sender: String,
}

/// AWS credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwsConfig {
    pub region: String,
    pub access_key: String,
    pub secret_access_key: Secret,
}

/// Off-chain index service endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubgraphConfig {
    pub l1_url: String,
    pub l2_url: String,
}

/// String credential with a redacting `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_debug_is_redacted() {
        let aws = AwsConfig {
            region: "us-east-1".to_string(),
            access_key: "AKIA".to_string(),
            secret_access_key: Secret::new("wJalrXUtnFEMI"),
        };
        let rendered = format!("{:?}", aws);
        assert!(rendered.contains("us-east-1"));
        assert!(!rendered.contains("wJalrXUtnFEMI"));
        assert_eq!(aws.secret_access_key.expose(), "wJalrXUtnFEMI");
    }
}
