//! Configuration module for Forkwise
//!
//! Resolution order for everything that can be set in more than one place:
//! 1. CLI flags (highest priority)
//! 2. Process environment
//! 3. Project `.env` file
//! 4. Project file (`forkwise.toml`)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod inputs;
mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use env_validator::{closest_match, levenshtein, EnvVarValidator};
pub use inputs::{
    ConfigInputs, COINMARKETCAP_KEY_VAR, DEPLOYER_KEY_VAR, ETHERSCAN_KEY_VAR, FORK_POLICY_VAR,
    FORK_VAR, RPC_KEY_VAR,
};
pub use loader::parse_with_warnings;
pub use types::{
    ForkConfig, GasReporterConfig, NetworksConfig, PathsConfig, ProjectFile, ProjectSection,
    TestRunnerConfig, VerificationConfig, PROJECT_FILE_NAME,
};
