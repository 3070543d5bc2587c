//! Project file (`forkwise.toml`) schema

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::services::{NetworkOverride, CATALOG_VERSION};
use crate::domain::value_objects::{CompilerSettings, ConfigWarning, ForkPolicy, ProjectPaths};
use crate::error::ForkwiseResult;

use super::loader;

/// File name looked up in the project root
pub const PROJECT_FILE_NAME: &str = "forkwise.toml";

/// `[project]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Display name; defaults to the project directory name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default = "default_network")]
    pub default_network: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            name: None,
            default_network: default_network(),
        }
    }
}

fn default_network() -> String {
    "hardhat".to_string()
}

/// `[paths]` section, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_sources")]
    pub sources: PathBuf,

    #[serde(default = "default_tests")]
    pub tests: PathBuf,

    #[serde(default = "default_cache")]
    pub cache: PathBuf,

    #[serde(default = "default_artifacts")]
    pub artifacts: PathBuf,

    #[serde(default = "default_deployments")]
    pub deployments: PathBuf,

    #[serde(default = "default_typechain")]
    pub typechain: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            tests: default_tests(),
            cache: default_cache(),
            artifacts: default_artifacts(),
            deployments: default_deployments(),
            typechain: default_typechain(),
        }
    }
}

impl PathsConfig {
    /// Join every entry onto `root`. Absolute entries stay as they are.
    pub fn resolve(&self, root: &Path) -> ProjectPaths {
        ProjectPaths {
            root: root.to_path_buf(),
            sources: root.join(&self.sources),
            tests: root.join(&self.tests),
            cache: root.join(&self.cache),
            artifacts: root.join(&self.artifacts),
            deployments: root.join(&self.deployments),
            typechain: root.join(&self.typechain),
        }
    }
}

fn default_sources() -> PathBuf {
    PathBuf::from("contracts")
}

fn default_tests() -> PathBuf {
    PathBuf::from("test")
}

fn default_cache() -> PathBuf {
    PathBuf::from("cache")
}

fn default_artifacts() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_deployments() -> PathBuf {
    PathBuf::from("deployments")
}

fn default_typechain() -> PathBuf {
    PathBuf::from("typechain")
}

/// `[networks]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworksConfig {
    /// Catalog version the project was written against
    #[serde(default = "default_catalog")]
    pub catalog: u32,

    /// Catalog names to declare; all of them when omitted
    #[serde(default)]
    pub enabled: Option<Vec<String>>,

    /// Per-network overrides and project-specific networks
    #[serde(default)]
    pub custom: BTreeMap<String, NetworkOverride>,
}

impl Default for NetworksConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            enabled: None,
            custom: BTreeMap::new(),
        }
    }
}

fn default_catalog() -> u32 {
    CATALOG_VERSION
}

/// `[fork]` section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct ForkConfig {
    /// Reject fork sources that are not declared networks
    #[serde(default)]
    pub strict: bool,
}

impl ForkConfig {
    pub fn policy(&self) -> ForkPolicy {
        if self.strict {
            ForkPolicy::Strict
        } else {
            ForkPolicy::Lenient
        }
    }
}

/// `[verification]` section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// `[gas_reporter]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasReporterConfig {
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_gas_price")]
    pub gas_price: u32,

    /// Attach the pricing-data key
    #[serde(default)]
    pub coinmarketcap: bool,
}

impl Default for GasReporterConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            gas_price: default_gas_price(),
            coinmarketcap: false,
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_gas_price() -> u32 {
    40
}

/// `[test_runner]` section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TestRunnerConfig {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for TestRunnerConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    2_000_000
}

fn default_true() -> bool {
    true
}

fn default_compilers() -> Vec<CompilerSettings> {
    vec![CompilerSettings::default()]
}

fn default_named_accounts() -> BTreeMap<String, u32> {
    BTreeMap::from([("deployer".to_string(), 0)])
}

/// Main project file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default = "default_compilers")]
    pub compilers: Vec<CompilerSettings>,

    #[serde(default = "default_named_accounts")]
    pub named_accounts: BTreeMap<String, u32>,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub networks: NetworksConfig,

    #[serde(default)]
    pub fork: ForkConfig,

    #[serde(default)]
    pub verification: VerificationConfig,

    #[serde(default)]
    pub gas_reporter: GasReporterConfig,

    #[serde(default)]
    pub test_runner: TestRunnerConfig,
}

impl Default for ProjectFile {
    fn default() -> Self {
        Self {
            project: ProjectSection::default(),
            compilers: default_compilers(),
            named_accounts: default_named_accounts(),
            paths: PathsConfig::default(),
            networks: NetworksConfig::default(),
            fork: ForkConfig::default(),
            verification: VerificationConfig::default(),
            gas_reporter: GasReporterConfig::default(),
            test_runner: TestRunnerConfig::default(),
        }
    }
}

impl ProjectFile {
    /// Load a project file from TOML
    pub fn load(path: &Path) -> ForkwiseResult<Self> {
        let (file, _warnings) = loader::load_with_warnings(path)?;
        Ok(file)
    }

    /// Load and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ForkwiseResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `<root>/forkwise.toml`, or defaults when it does not exist
    pub fn load_or_default(root: &Path) -> ForkwiseResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(root)
    }
}
