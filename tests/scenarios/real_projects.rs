//! Scenario: each known contract project resolves as its team expects.

use crate::common::*;

#[test]
fn scenario_every_project_resolves_and_checks() {
    for (name, config, runs) in ALL_PROJECTS {
        let env = TestEnv::builder()
            .with_project_config(config)
            .with_dotenv(&format!(
                "RINKEBY_PRIVATE_KEY={}\nETHERSCAN_API_KEY=scan\nINFURA_KEY=infura\n",
                DEPLOYER_KEY
            ))
            .build();

        let show = env.run(&["show", "--json"]);
        assert!(show.success, "{name}: {}", show.stderr);
        let json = show.json();
        assert_eq!(json["project"], *name);
        assert_eq!(json["compilers"][0]["optimizer"]["runs"], *runs);

        let check = env.run(&["check", "--strict-warnings"]);
        assert!(check.success, "{name}: {}", check.stdout);
    }
}

#[test]
fn scenario_voucher_core_uses_alternate_bsc_seed() {
    let env = TestEnv::builder().with_project_config(VOUCHER_CORE).build();
    let result = env.run(&["show", "--network", "bsctest", "--json"]);

    let network = &result.json()["network"];
    assert_eq!(network["url"], "https://data-seed-prebsc-2-s2.binance.org:8545");
    assert_eq!(network["live"], true);
    assert_eq!(network["save_deployments"], true);
}

#[test]
fn scenario_bond_voucher_endpoints_use_rpc_key() {
    let env = TestEnv::builder()
        .with_project_config(BOND_VOUCHER)
        .with_env("INFURA_KEY", "infura")
        .build();
    let result = env.run(&["networks", "--json", "--reveal-secrets"]);
    let json = result.json();
    let url_of = |name: &str| {
        json.as_array()
            .unwrap()
            .iter()
            .find(|n| n["name"] == name)
            .map(|n| n["url"].as_str().unwrap().to_string())
            .unwrap()
    };

    assert_eq!(url_of("development"), "https://rinkeby.infura.io/v3/infura");
    assert_eq!(url_of("mainnet"), "https://mainnet.infura.io/v3/infura");
    assert_eq!(
        url_of("bsctest"),
        "https://speedy-nodes-nyc.moralis.io/testnet/bsc/testnet"
    );
}

#[test]
fn scenario_marketplace_prices_gas_with_coinmarketcap() {
    let env = TestEnv::builder()
        .with_project_config(MARKETPLACE_V2)
        .with_env("COINMARKETCAP_API_KEY", "cmc-key")
        .build();
    let result = env.run(&["show", "--json", "--reveal-secrets"]);

    let gas = &result.json()["gas_reporter"];
    assert_eq!(gas["currency"], "USD");
    assert_eq!(gas["gas_price"], 40);
    assert_eq!(gas["coinmarketcap"], "cmc-key");
}

#[test]
fn scenario_project_without_gas_pricing_omits_key() {
    let env = TestEnv::builder()
        .with_project_config(UPGRADE_PROXY)
        .with_env("COINMARKETCAP_API_KEY", "cmc-key")
        .build();
    let result = env.run(&["show", "--json", "--reveal-secrets"]);

    assert!(result.json()["gas_reporter"].get("coinmarketcap").is_none());
}
