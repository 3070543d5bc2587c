//! Project files for the contract repositories Forkwise was built around.
//!
//! Each fixture reproduces the compiler and network settings of one real
//! project so scenario tests exercise realistic shapes.

/// Marketplace: size-optimized build, gas pricing via CoinMarketCap
pub const MARKETPLACE_V2: &str = r#"
[project]
name = "marketplace-v2"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 1 }

[gas_reporter]
coinmarketcap = true
"#;

/// Voucher core: alternate BSC testnet seed
pub const VOUCHER_CORE: &str = r#"
[project]
name = "voucher-core"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 1 }

[networks.custom.bsctest]
url = "https://data-seed-prebsc-2-s2.binance.org:8545"
"#;

/// Bond voucher: infura-backed development and mainnet endpoints
pub const BOND_VOUCHER: &str = r#"
[project]
name = "bond-voucher"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 1 }

[networks.custom.development]
url = "https://rinkeby.infura.io/v3/${INFURA_KEY}"

[networks.custom.mainnet]
url = "https://mainnet.infura.io/v3/${INFURA_KEY}"

[networks.custom.bsctest]
url = "https://speedy-nodes-nyc.moralis.io/testnet/bsc/testnet"
live = true
save_deployments = true
"#;

/// Shared utilities: small network set, private development node
pub const SOLIDITY_UTILS: &str = r#"
[project]
name = "solidity-utils"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 1000 }

[networks]
enabled = ["hardhat", "localhost", "development", "rinkeby", "coverage"]

[networks.custom.development]
url = "http://123.57.44.197:18241"

[networks.custom.rinkeby]
url = "http://123.57.44.197:18241"
"#;

/// Solver: public polygon endpoint
pub const SOLVER: &str = r#"
[project]
name = "solver"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 200 }

[networks.custom.polygon]
url = "https://rpc-mainnet.maticvigil.com"
"#;

/// Upgradeable proxy: catalog networks only
pub const UPGRADE_PROXY: &str = r#"
[project]
name = "upgrade-proxy"

[[compilers]]
version = "0.7.6"
optimizer = { enabled = true, runs = 1000 }
"#;

/// Every fixture with its project name and optimizer runs
pub const ALL_PROJECTS: &[(&str, &str, u32)] = &[
    ("marketplace-v2", MARKETPLACE_V2, 1),
    ("voucher-core", VOUCHER_CORE, 1),
    ("bond-voucher", BOND_VOUCHER, 1),
    ("solidity-utils", SOLIDITY_UTILS, 1000),
    ("solver", SOLVER, 200),
    ("upgrade-proxy", UPGRADE_PROXY, 1000),
];

/// A deployer key long enough to be partially shown when redacted
pub const DEPLOYER_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe512961";
