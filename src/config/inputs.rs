//! Configuration inputs
//!
//! Every external input the resolver reads, gathered once at process start
//! and then passed by value. Nothing downstream touches the environment.
//!
//! | variable                 | meaning                          | when absent        |
//! |--------------------------|----------------------------------|--------------------|
//! | `RINKEBY_PRIVATE_KEY`    | deployer signing key             | all-zero key       |
//! | `ETHERSCAN_API_KEY`      | verification service key         | empty              |
//! | `COINMARKETCAP_API_KEY`  | pricing data key                 | empty              |
//! | `INFURA_KEY`             | RPC provider key                 | empty              |
//! | `HARDHAT_FORK`           | network the local chain forks    | no forwarding      |
//! | `FORKWISE_FORK_POLICY`   | `lenient` / `strict`             | project file value |

use crate::domain::ports::InputSource;
use crate::domain::services::resolve_secret;
use crate::domain::value_objects::{ForkDirective, ForkPolicy, Secret, SecretKind};

use super::env_validator::EnvVarValidator;

pub const DEPLOYER_KEY_VAR: &str = "RINKEBY_PRIVATE_KEY";
pub const ETHERSCAN_KEY_VAR: &str = "ETHERSCAN_API_KEY";
pub const COINMARKETCAP_KEY_VAR: &str = "COINMARKETCAP_API_KEY";
pub const RPC_KEY_VAR: &str = "INFURA_KEY";
pub const FORK_VAR: &str = "HARDHAT_FORK";
pub const FORK_POLICY_VAR: &str = "FORKWISE_FORK_POLICY";

/// All inputs, resolved.
#[derive(Debug, Clone)]
pub struct ConfigInputs {
    pub deployer_key: Secret,
    pub etherscan_key: Secret,
    pub coinmarketcap_key: Secret,
    pub rpc_key: Secret,
    pub fork: ForkDirective,
    /// Overrides the project file's `[fork] strict` when set
    pub fork_policy: Option<ForkPolicy>,
}

impl ConfigInputs {
    /// Read every input from `source`. Never fails.
    pub fn resolve<S: InputSource + ?Sized>(source: &S) -> Self {
        Self::resolve_with_writer(source, &mut std::io::stderr())
    }

    /// Same as [`resolve`](Self::resolve), with warnings written to `writer`
    pub fn resolve_with_writer<S, W>(source: &S, writer: &mut W) -> Self
    where
        S: InputSource + ?Sized,
        W: std::io::Write,
    {
        let secret = |name: &str, kind: SecretKind| {
            let raw = source.var(name);
            resolve_secret(name, kind, raw.as_deref())
        };

        let fork = ForkDirective::from_input(source.var(FORK_VAR).as_deref());
        if let Some(from) = fork.source() {
            tracing::debug!(source = from, "fork forwarding requested");
        }

        let fork_policy = source.var(FORK_POLICY_VAR).and_then(|value| {
            EnvVarValidator::new(FORK_POLICY_VAR, &["lenient", "strict"]).parse_with_writer(
                &value,
                |s| ForkPolicy::parse(s).map(Some),
                None,
                writer,
            )
        });

        Self {
            deployer_key: secret(DEPLOYER_KEY_VAR, SecretKind::SigningKey),
            etherscan_key: secret(ETHERSCAN_KEY_VAR, SecretKind::ApiKey),
            coinmarketcap_key: secret(COINMARKETCAP_KEY_VAR, SecretKind::ApiKey),
            rpc_key: secret(RPC_KEY_VAR, SecretKind::ApiKey),
            fork,
            fork_policy,
        }
    }

    /// Inputs as if nothing were set
    pub fn unset() -> Self {
        Self::resolve(&NoInputs)
    }
}

struct NoInputs;

impl InputSource for NoInputs {
    fn var(&self, _name: &str) -> Option<String> {
        None
    }
}
