//! Scenario: CI gates deployments on `forkwise check --strict-warnings`.

use crate::common::*;

#[test]
fn scenario_ci_fails_until_keys_are_provided() {
    let env = TestEnv::builder().with_project_config(SOLVER).build();

    // Step 1: no keys, the gate fails
    let first = env.run(&["check", "--strict-warnings", "--json"]);
    assert!(!first.success);
    let json = first.json();
    assert_eq!(json["success"], false);
    assert_eq!(json["errors"], 0);
    assert_eq!(json["warnings"], 2);

    // Step 2: CI injects keys through the environment, the gate passes
    let second = env.run_with_env(
        &["check", "--strict-warnings", "--json"],
        &[
            ("RINKEBY_PRIVATE_KEY", DEPLOYER_KEY),
            ("ETHERSCAN_API_KEY", "scan"),
        ],
    );
    assert!(second.success, "{}", second.stdout);
    assert_eq!(second.json()["warnings"], 0);
}

#[test]
fn scenario_ci_output_never_leaks_keys() {
    let env = TestEnv::builder()
        .with_project_config(BOND_VOUCHER)
        .with_env("RINKEBY_PRIVATE_KEY", DEPLOYER_KEY)
        .with_env("INFURA_KEY", "9aa3d95b3bc440fa88ea12eaa4456161")
        .build();

    for args in [
        vec!["show", "--network", "mainnet"],
        vec!["show", "--network", "mainnet", "--json"],
        vec!["networks"],
        vec!["networks", "--format", "yaml"],
        vec!["check", "-v"],
    ] {
        let result = env.run(&args);
        let output = result.combined_output();
        assert!(!output.contains(DEPLOYER_KEY), "{args:?} leaked the deployer key");
        assert!(
            !output.contains("9aa3d95b3bc440fa88ea12eaa4456161"),
            "{args:?} leaked the rpc key"
        );
    }
}
