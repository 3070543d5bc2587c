//! Scenario: a developer forks mainnet locally and reuses its deployments.
//!
//! Mainnet records already exist under `deployments/mainnet/`. With the fork
//! input set, the local networks must find them after their own records.

use crate::common::*;

#[test]
fn scenario_local_fork_sees_mainnet_records() {
    let env = TestEnv::builder()
        .with_project_config(UPGRADE_PROXY)
        .with_deployments("mainnet")
        .with_dotenv("HARDHAT_FORK=mainnet\n")
        .build();

    // Step 1: the fork is recognized and the source is declared
    let check = env.run(&["check", "--json"]);
    let json = check.json();
    let fork = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == "fork")
        .expect("fork item");
    assert_eq!(fork["status"], "pass");
    assert!(fork["message"].as_str().unwrap().contains("mainnet"));

    // Step 2: both local networks search their own records, then mainnet's
    for network in ["hardhat", "localhost"] {
        let paths = env.run(&["paths", "--network", network]);
        let lines = paths.lines();
        assert_eq!(lines.len(), 2, "{network}: {}", paths.stdout);
        assert_eq!(lines[1], env.records_dir("mainnet").display().to_string());
        assert!(std::path::Path::new(lines[1]).is_dir());
    }

    // Step 3: remote networks are untouched
    let bsc = env.run(&["paths", "--network", "bsc"]);
    assert_eq!(bsc.lines(), vec![env.records_dir("bsc").display().to_string()]);

    // Step 4: forwarding never writes to the records tree
    assert!(!env.records_dir("hardhat").exists());
}

#[test]
fn scenario_stopping_the_fork_restores_plain_lookup() {
    let env = TestEnv::builder().with_deployments("mainnet").build();

    let forked = env.run_with_env(&["paths", "--network", "hardhat"], &[("HARDHAT_FORK", "mainnet")]);
    assert_eq!(forked.lines().len(), 2);

    let plain = env.run(&["paths", "--network", "hardhat"]);
    assert_eq!(plain.lines(), vec![env.records_dir("hardhat").display().to_string()]);
}

#[test]
fn scenario_typo_in_fork_source_is_caught_by_strict_projects() {
    let env = TestEnv::builder()
        .with_project_config("[fork]\nstrict = true\n")
        .with_env("HARDHAT_FORK", "mainet")
        .build();

    let show = env.run(&["show"]);
    assert!(!show.success);
    assert!(show.stderr.contains("'mainet'"));

    // The environment can relax a strict project for a one-off run
    let relaxed = env.run_with_env(&["show", "--json"], &[("FORKWISE_FORK_POLICY", "lenient")]);
    assert!(relaxed.success, "{}", relaxed.stderr);
}
