//! CONTRACT: input precedence and absence.

use crate::common::*;

/// CONTRACT: Every read-only command succeeds with no inputs at all.
#[test]
fn contract_missing_inputs_never_fail() {
    let env = TestEnv::builder().build();

    for args in [
        vec!["show"],
        vec!["show", "--network", "rinkeby"],
        vec!["networks"],
        vec!["paths", "--network", "localhost"],
        vec!["check"],
        vec!["explain"],
    ] {
        let result = env.run(&args);
        assert!(result.success, "{args:?} failed: {}", result.stderr);
    }
}

/// CONTRACT: The process environment wins over `.env` for every input.
#[test]
fn contract_process_env_wins_over_dotenv() {
    let env = TestEnv::builder()
        .with_dotenv(
            "RINKEBY_PRIVATE_KEY=dotenv-deployer\n\
             ETHERSCAN_API_KEY=dotenv-scan\n\
             HARDHAT_FORK=bsc\n",
        )
        .with_env("RINKEBY_PRIVATE_KEY", "env-deployer")
        .with_env("ETHERSCAN_API_KEY", "env-scan")
        .with_env("HARDHAT_FORK", "mainnet")
        .build();
    let json = env
        .run(&["show", "--network", "localhost", "--json", "--reveal-secrets"])
        .json();

    assert_eq!(json["verification"]["api_key"], "env-scan");
    assert_eq!(json["fork"]["source"], "mainnet");

    let bsc = env
        .run(&["show", "--network", "bsc", "--json", "--reveal-secrets"])
        .json();
    assert_eq!(bsc["network"]["accounts"][0], "env-deployer");
}

/// CONTRACT: `.env` fills inputs the environment does not set.
#[test]
fn contract_dotenv_fills_gaps() {
    let env = TestEnv::builder()
        .with_dotenv("ETHERSCAN_API_KEY=dotenv-scan\n")
        .build();
    let json = env.run(&["show", "--json", "--reveal-secrets"]).json();

    assert_eq!(json["verification"]["api_key"], "dotenv-scan");
}

/// CONTRACT: An empty value counts as absent.
#[test]
fn contract_empty_value_is_absent() {
    let env = TestEnv::builder().with_env("RINKEBY_PRIVATE_KEY", "").build();
    let json = env
        .run(&["show", "--network", "bsc", "--json", "--reveal-secrets"])
        .json();

    assert_eq!(
        json["network"]["accounts"][0],
        "0000000000000000000000000000000000000000000000000000000000000000"
    );
}

/// CONTRACT: An invalid fork policy value falls back to the project file.
#[test]
fn contract_invalid_policy_value_is_ignored() {
    let env = TestEnv::builder()
        .with_env("HARDHAT_FORK", "nowhere")
        .with_env("FORKWISE_FORK_POLICY", "strikt")
        .build();
    let result = env.run(&["show"]);

    assert!(result.success, "{}", result.stderr);
    assert!(result.stderr.contains("FORKWISE_FORK_POLICY"));
}
