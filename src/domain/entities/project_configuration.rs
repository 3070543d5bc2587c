//! Project configuration aggregate.
//!
//! Built once per invocation by `application::assemble` and handed, read-only,
//! to whatever performs the deployment.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::services::{search_paths, ExternalDeployments, NetworkRegistry};
use crate::domain::value_objects::{
    CompilerSettings, ForkDirective, ForkPolicy, NetworkDescriptor, ProjectPaths, Secret,
};
use crate::error::ForkwiseResult;

/// Contract verification service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationSettings {
    pub enabled: bool,
    pub api_key: Secret,
}

/// Gas report settings passed through to the reporter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasReporterSettings {
    pub currency: String,
    pub gas_price: u32,
    /// Pricing-data key, only present when the project opts in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coinmarketcap: Option<Secret>,
}

/// The aggregate root.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfiguration {
    pub name: String,
    pub default_network: String,
    pub compilers: Vec<CompilerSettings>,
    pub named_accounts: BTreeMap<String, u32>,
    pub paths: ProjectPaths,
    pub networks: NetworkRegistry,
    /// Key substituted into endpoint templates
    pub rpc_key: Secret,
    pub fork: ForkDirective,
    pub fork_policy: ForkPolicy,
    /// Extra record directories per network, empty unless forking
    pub external_deployments: ExternalDeployments,
    pub verification: VerificationSettings,
    pub gas_reporter: GasReporterSettings,
    pub test_timeout_ms: u64,
}

/// One network picked for a deployment run, with its record search paths.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedTarget<'a> {
    pub network: &'a NetworkDescriptor,
    pub search_paths: Vec<PathBuf>,
}

impl ProjectConfiguration {
    /// Descriptor for a declared network
    pub fn network(&self, name: &str) -> ForkwiseResult<&NetworkDescriptor> {
        self.networks.lookup(name)
    }

    /// Record directories for a network.
    ///
    /// Works for any name; undeclared names just get their own directory.
    pub fn search_paths(&self, network: &str) -> Vec<PathBuf> {
        search_paths(network, &self.paths.deployments, &self.external_deployments)
    }

    /// Resolve the network to act on. `None` means the project's default.
    pub fn target(&self, selection: Option<&str>) -> ForkwiseResult<ResolvedTarget<'_>> {
        let name = selection.unwrap_or(&self.default_network);
        let network = self.network(name)?;
        Ok(ResolvedTarget {
            network,
            search_paths: self.search_paths(&network.name),
        })
    }

    /// Whether the fork source, if any, names a declared network
    pub fn fork_source_is_declared(&self) -> bool {
        match self.fork.source() {
            Some(source) => self.networks.contains(source),
            None => true,
        }
    }

    /// Networks that would sign with the placeholder key against a live chain
    pub fn live_networks_without_key(&self) -> Vec<&NetworkDescriptor> {
        self.networks
            .iter()
            .filter(|n| n.live && n.uses_placeholder_key())
            .collect()
    }
}
