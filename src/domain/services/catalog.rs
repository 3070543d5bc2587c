//! Shared network catalog.
//!
//! Every logical network any project may target is described once here.
//! Projects pick entries and override fields; they never copy endpoints.
//! Bump [`CATALOG_VERSION`] whenever an existing entry changes meaning.

use crate::domain::value_objects::NetworkKind;

/// Version projects declare in `networks.catalog`
pub const CATALOG_VERSION: u32 = 1;

/// One catalog row. `url` may contain `${INFURA_KEY}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub kind: NetworkKind,
    pub url: Option<&'static str>,
    pub chain_id: Option<u64>,
    /// Whether the deployer key is attached
    pub signer: bool,
    pub live: bool,
    pub save_deployments: bool,
}

impl CatalogEntry {
    /// Look up a catalog row by logical name
    pub fn find(name: &str) -> Option<&'static CatalogEntry> {
        CATALOG.iter().find(|entry| entry.name == name)
    }
}

const fn in_process(name: &'static str, kind: NetworkKind) -> CatalogEntry {
    CatalogEntry {
        name,
        kind,
        url: None,
        chain_id: None,
        signer: false,
        live: false,
        save_deployments: false,
    }
}

const fn remote(name: &'static str, url: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: NetworkKind::Remote,
        url: Some(url),
        chain_id: None,
        signer: true,
        live: false,
        save_deployments: false,
    }
}

const fn published(name: &'static str, url: &'static str, chain_id: Option<u64>) -> CatalogEntry {
    CatalogEntry {
        chain_id,
        live: true,
        save_deployments: true,
        ..remote(name, url)
    }
}

const SOLV_DEV_NODE: &str = "http://47.88.20.217:8545";
const SOLV_MAIN_NODE: &str = "http://172.21.121.12:8545";
const BSC_DATASEED: &str = "https://bsc-dataseed.binance.org/";
const RINKEBY_RELAY: &str = "http://123.57.44.197:18241";

static CATALOG: &[CatalogEntry] = &[
    in_process("hardhat", NetworkKind::InProcess),
    in_process("localhost", NetworkKind::LocalDaemon),
    remote("development", SOLV_DEV_NODE),
    remote("testnet", SOLV_DEV_NODE),
    remote("labs", SOLV_DEV_NODE),
    remote("mainnet", SOLV_MAIN_NODE),
    remote("rinkeby", RINKEBY_RELAY),
    published("bsctest", "https://data-seed-prebsc-1-s1.binance.org:8545", None),
    published("bscstage", BSC_DATASEED, Some(56)),
    published("bsc", BSC_DATASEED, Some(56)),
    remote("mumbai", "https://rpc-mumbai.maticvigil.com"),
    remote("polygon", "https://polygon-rpc.com/"),
    remote("ftmtest", "https://rpc.testnet.fantom.network/"),
    remote("ftm", "https://rpc.ankr.com/fantom/"),
    remote("arbtest", "https://rinkeby.arbitrum.io/rpc"),
    remote("arb", "https://arb1.arbitrum.io/rpc"),
    // Coverage runs its own ganache client, no deployer needed
    CatalogEntry {
        signer: false,
        ..remote("coverage", "http://127.0.0.1:8555")
    },
];

/// All catalog rows in declaration order
pub fn catalog() -> &'static [CatalogEntry] {
    CATALOG
}
