//! CONTRACT: report shape and stream discipline.

use crate::common::*;

/// CONTRACT: stdout carries only the report; diagnostics go to stderr.
#[test]
fn contract_json_stdout_stays_parseable_with_warnings() {
    let env = TestEnv::builder()
        .with_project_config("[gas_reporter]\ncurency = \"EUR\"\n")
        .with_env("HARDHAT_FORK", "nowhere")
        .build();
    let result = env.run(&["show", "--json", "-vv"]);

    assert!(result.success, "{}", result.stderr);
    let _ = result.json();
    assert!(!result.stderr.is_empty());
}

/// CONTRACT: JSON show reports carry these top-level keys.
#[test]
fn contract_show_json_keys() {
    let env = TestEnv::builder().build();
    let json = env.run(&["show", "--json"]).json();
    let mut keys: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();

    assert_eq!(
        keys,
        vec![
            "compilers",
            "default_network",
            "fork",
            "fork_source_declared",
            "gas_reporter",
            "named_accounts",
            "network",
            "paths",
            "project",
            "search_paths",
            "test_timeout_ms",
            "verification",
        ]
    );
}

/// CONTRACT: In-process networks have no endpoint and no accounts.
#[test]
fn contract_in_process_networks_have_no_endpoint() {
    let env = TestEnv::builder().build();
    let json = env.run(&["networks", "--json"]).json();

    for network in json.as_array().unwrap() {
        let name = network["name"].as_str().unwrap();
        if name == "hardhat" || name == "localhost" {
            assert!(network.get("url").is_none(), "{name}");
            assert_eq!(network["accounts"].as_array().unwrap().len(), 0, "{name}");
        } else {
            assert!(network["url"].as_str().is_some_and(|u| !u.is_empty()), "{name}");
        }
    }
}
