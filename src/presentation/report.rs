//! Report models
//!
//! Serializable views of a [`ProjectConfiguration`]. Secrets are redacted
//! unless the caller asks for them.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::entities::ProjectConfiguration;
use crate::domain::value_objects::{
    CompilerSettings, ForkDirective, NetworkDescriptor, NetworkKind, ProjectPaths, Secret,
};
use crate::error::ForkwiseResult;

/// How secrets appear in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecretDisplay {
    #[default]
    Redacted,
    Revealed,
}

impl SecretDisplay {
    pub fn from_reveal(reveal: bool) -> Self {
        if reveal {
            SecretDisplay::Revealed
        } else {
            SecretDisplay::Redacted
        }
    }

    pub fn show(self, secret: &Secret) -> String {
        match self {
            SecretDisplay::Revealed => secret.expose().to_string(),
            SecretDisplay::Redacted => secret.redacted(),
        }
    }

    /// Mask an expanded endpoint that embeds `key`
    fn endpoint(self, url: &str, key: &Secret) -> String {
        let raw = key.expose();
        if self == SecretDisplay::Revealed || raw.is_empty() || !url.contains(raw) {
            return url.to_string();
        }
        url.replace(raw, &key.redacted())
    }
}

/// One network, display-ready
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkReport {
    pub name: String,
    pub kind: NetworkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    pub accounts: Vec<String>,
    pub live: bool,
    pub save_deployments: bool,
}

impl NetworkReport {
    pub fn new(network: &NetworkDescriptor, rpc_key: &Secret, display: SecretDisplay) -> Self {
        Self {
            name: network.name.clone(),
            kind: network.kind,
            url: network.url.as_deref().map(|u| display.endpoint(u, rpc_key)),
            chain_id: network.chain_id,
            accounts: network.accounts.iter().map(|a| display.show(a)).collect(),
            live: network.live,
            save_deployments: network.save_deployments,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub enabled: bool,
    pub api_key: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GasReporterReport {
    pub currency: String,
    pub gas_price: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinmarketcap: Option<String>,
}

/// Everything `show` prints for one active network
#[derive(Debug, Clone, Serialize)]
pub struct ShowReport {
    pub project: String,
    pub default_network: String,
    pub network: NetworkReport,
    pub search_paths: Vec<PathBuf>,
    pub fork: ForkDirective,
    pub fork_source_declared: bool,
    pub compilers: Vec<CompilerSettings>,
    pub named_accounts: BTreeMap<String, u32>,
    pub paths: ProjectPaths,
    pub verification: VerificationReport,
    pub gas_reporter: GasReporterReport,
    pub test_timeout_ms: u64,
}

impl ShowReport {
    /// Build for `network`, or the project's default network when `None`
    pub fn build(
        config: &ProjectConfiguration,
        network: Option<&str>,
        display: SecretDisplay,
    ) -> ForkwiseResult<Self> {
        let target = config.target(network)?;
        Ok(Self {
            project: config.name.clone(),
            default_network: config.default_network.clone(),
            network: NetworkReport::new(target.network, &config.rpc_key, display),
            search_paths: target.search_paths,
            fork: config.fork.clone(),
            fork_source_declared: config.fork_source_is_declared(),
            compilers: config.compilers.clone(),
            named_accounts: config.named_accounts.clone(),
            paths: config.paths.clone(),
            verification: VerificationReport {
                enabled: config.verification.enabled,
                api_key: display.show(&config.verification.api_key),
            },
            gas_reporter: GasReporterReport {
                currency: config.gas_reporter.currency.clone(),
                gas_price: config.gas_reporter.gas_price,
                coinmarketcap: config
                    .gas_reporter
                    .coinmarketcap
                    .as_ref()
                    .map(|k| display.show(k)),
            },
            test_timeout_ms: config.test_timeout_ms,
        })
    }
}

/// Every declared network, in declaration order
pub fn network_reports(config: &ProjectConfiguration, display: SecretDisplay) -> Vec<NetworkReport> {
    config
        .networks
        .iter()
        .map(|n| NetworkReport::new(n, &config.rpc_key, display))
        .collect()
}

/// Record search paths of one network
#[derive(Debug, Clone, Serialize)]
pub struct PathsReport {
    pub network: String,
    pub search_paths: Vec<PathBuf>,
}

impl PathsReport {
    /// Unknown networks are an error here, unlike
    /// [`ProjectConfiguration::search_paths`].
    pub fn build(config: &ProjectConfiguration, network: &str) -> ForkwiseResult<Self> {
        let target = config.target(Some(network))?;
        Ok(Self {
            network: target.network.name.clone(),
            search_paths: target.search_paths,
        })
    }
}
