//! # Environment Variable Names
//!
//! Names are a fixed contract with the deployment; do not rename.
//!
//! | Variable | Description | Required |
//! |----------|-------------|----------|
//! | `POAP_CONTRACT_ADDR` | Layer-1 POAP contract | layer1 only |
//! | `L2_POAP_CONTRACT_ADDR` | Layer-2 POAP contract | layer2 only |
//! | `POAP_VOTE_CONTRACT_ADDR` | Vote contract | Always |
//! | `PROVIDER` | Layer-1 selector: `infura`, `local`, anything else = RPC | layer1 |
//! | `ETH_NETWORK` | Network name for `infura` and RPC | layer1, unless `local` |
//! | `INFURA_PK` | Hosted-provider project key | layer1 + `infura` |
//! | `PROVIDER_RPC_URL` | Layer-1 RPC endpoint | layer1 + RPC |
//! | `L2_PROVIDER` | Layer-2 selector: `local`, anything else = RPC | layer2 |
//! | `L2_PROVIDER_RPC_URL` | Layer-2 RPC endpoint | layer2 + RPC |
//! | `POAP_OWNER_PK` | Administrator private key | Always |
//! | `POAP_HELPERS_PK` | JSON array of helper private keys | Always |
//! | `ADMIN_EMAILS` | JSON array of administrator emails | Always |
//! | `SECRET_KEY` | Application secret | Always |
//! | `SWAGGER_HOST`, `SWAGGER_URL` | API docs location | Always |
//! | `AUTH0_APP_NAME`, `AUTH0_KID`, `AUTH0_AUDIENCE` | Auth0 settings | Always |
//! | `GOOGLE_STORAGE_BUCKET` | Cloud storage bucket | Always |
//! | `NEW_EVENT_EMAIL_TEMPLATE` | Email template id | Always |
//! | `NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE` | Email template id | Always |
//! | `REDEEM_TOKENS_EMAIL_TEMPLATE` | Email template id | Always |
//! | `SENDER_EMAIL` | From address | Always |
//! | `AWS_REGION`, `AWS_ACCESS_KEY`, `AWS_SECRET_ACCESS_KEY` | AWS credentials | Always |
//! | `L1_POAP_SUBGRAPH_URL`, `L2_POAP_SUBGRAPH_URL` | Subgraph endpoints | Always |

pub const POAP_CONTRACT_ADDR: &str = "POAP_CONTRACT_ADDR";
pub const L2_POAP_CONTRACT_ADDR: &str = "L2_POAP_CONTRACT_ADDR";
pub const POAP_VOTE_CONTRACT_ADDR: &str = "POAP_VOTE_CONTRACT_ADDR";

pub const PROVIDER: &str = "PROVIDER";
pub const ETH_NETWORK: &str = "ETH_NETWORK";
pub const INFURA_PK: &str = "INFURA_PK";
pub const PROVIDER_RPC_URL: &str = "PROVIDER_RPC_URL";
pub const L2_PROVIDER: &str = "L2_PROVIDER";
pub const L2_PROVIDER_RPC_URL: &str = "L2_PROVIDER_RPC_URL";

pub const POAP_OWNER_PK: &str = "POAP_OWNER_PK";
pub const POAP_HELPERS_PK: &str = "POAP_HELPERS_PK";
pub const ADMIN_EMAILS: &str = "ADMIN_EMAILS";

pub const SECRET_KEY: &str = "SECRET_KEY";
pub const SWAGGER_HOST: &str = "SWAGGER_HOST";
pub const SWAGGER_URL: &str = "SWAGGER_URL";
pub const AUTH0_APP_NAME: &str = "AUTH0_APP_NAME";
pub const AUTH0_KID: &str = "AUTH0_KID";
pub const AUTH0_AUDIENCE: &str = "AUTH0_AUDIENCE";
pub const GOOGLE_STORAGE_BUCKET: &str = "GOOGLE_STORAGE_BUCKET";
pub const NEW_EVENT_EMAIL_TEMPLATE: &str = "NEW_EVENT_EMAIL_TEMPLATE";
pub const NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE: &str = "NEW_EVENT_TEMPLATE_EMAIL_TEMPLATE";
pub const REDEEM_TOKENS_EMAIL_TEMPLATE: &str = "REDEEM_TOKENS_EMAIL_TEMPLATE";
pub const SENDER_EMAIL: &str = "SENDER_EMAIL";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_ACCESS_KEY: &str = "AWS_ACCESS_KEY";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const L1_POAP_SUBGRAPH_URL: &str = "L1_POAP_SUBGRAPH_URL";
pub const L2_POAP_SUBGRAPH_URL: &str = "L2_POAP_SUBGRAPH_URL";
