//! Shared fixtures for configuration tests.

#![allow(dead_code)]

use poap_config::Env;

// Anvil development accounts 0, 1 and 2.
pub const OWNER_PK: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const OWNER_ADDRESS: &str = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266";
pub const HELPER_1_PK: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const HELPER_1_ADDRESS: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
pub const HELPER_2_PK: &str = "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";
pub const HELPER_2_ADDRESS: &str = "0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc";

pub const L1_CONTRACT: &str = "0x22C1f6050E56d2876009903609a2cC3fEf83B415";
pub const L2_CONTRACT: &str = "0x22C1f6050E56d2876009903609a2cC3fEf83B416";

/// Every variable the loader can read, layer-1 provider on a generic RPC endpoint.
pub fn full_env() -> Env {
    let helpers = format!(r#"["{}", "{}"]"#, HELPER_1_PK, HELPER_2_PK);
    let mut env: Env = [
        ("POAP_CONTRACT_ADDR", L1_CONTRACT),
        ("L2_POAP_CONTRACT_ADDR", L2_CONTRACT),
        ("POAP_VOTE_CONTRACT_ADDR", "0x0000000000000000000000000000000000000abc"),
        ("PROVIDER", "jsonrpc"),
        ("ETH_NETWORK", "mainnet"),
        ("INFURA_PK", "0123456789abcdef"),
        ("PROVIDER_RPC_URL", "https://eth.example.org/rpc"),
        ("L2_PROVIDER", "gnosis"),
        ("L2_PROVIDER_RPC_URL", "https://rpc.gnosischain.com"),
        ("POAP_OWNER_PK", OWNER_PK),
        ("ADMIN_EMAILS", r#"["a@x.com","b@x.com"]"#),
        ("SECRET_KEY", "top-secret"),
        ("SWAGGER_HOST", "api.poap.test"),
        ("SWAGGER_URL", "https://api.poap.test/docs"),
        ("AUTH0_APP_NAME", "poap-test"),
        ("AUTH0_KID", "kid-1"),
        ("AUTH0_AUDIENCE", "poap-api"),
        ("GOOGLE_STORAGE_BUCKET", "poap-bucket"),
        ("NEW_EVENT_EMAIL_TEMPLATE", "tpl-new-event"),
        ("NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE", "tpl-new-event-template"),
        ("REDEEM_TOKENS_EMAIL_TEMPLATE", "tpl-redeem"),
        ("SENDER_EMAIL", "noreply@poap.test"),
        ("AWS_REGION", "us-east-1"),
        ("AWS_ACCESS_KEY", "AKIAEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "aws-secret"),
        ("L1_POAP_SUBGRAPH_URL", "https://subgraph.test/l1"),
        ("L2_POAP_SUBGRAPH_URL", "https://subgraph.test/l2"),
    ]
    .into_iter()
    .collect();
    env.set("POAP_HELPERS_PK", helpers);
    env
}

/// Variables a layer-1 load over a generic RPC endpoint must read.
pub const LAYER1_RPC_REQUIRED: &[&str] = &[
    "POAP_CONTRACT_ADDR",
    "PROVIDER",
    "ETH_NETWORK",
    "PROVIDER_RPC_URL",
    "POAP_OWNER_PK",
    "POAP_VOTE_CONTRACT_ADDR",
    "POAP_HELPERS_PK",
    "SECRET_KEY",
    "SWAGGER_HOST",
    "SWAGGER_URL",
    "AUTH0_APP_NAME",
    "AUTH0_KID",
    "AUTH0_AUDIENCE",
    "GOOGLE_STORAGE_BUCKET",
    "NEW_EVENT_EMAIL_TEMPLATE",
    "NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE",
    "REDEEM_TOKENS_EMAIL_TEMPLATE",
    "SENDER_EMAIL",
    "ADMIN_EMAILS",
    "AWS_REGION",
    "AWS_ACCESS_KEY",
    "AWS_SECRET_ACCESS_KEY",
    "L1_POAP_SUBGRAPH_URL",
    "L2_POAP_SUBGRAPH_URL",
];
