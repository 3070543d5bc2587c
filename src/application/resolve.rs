//! Resolve Use Case
//!
//! Assembles a [`ProjectConfiguration`] from a project file and resolved
//! inputs. `assemble` is pure; `ResolveUseCase` wires in the ports.

use std::path::Path;

use crate::config::{ConfigInputs, ProjectFile, PROJECT_FILE_NAME};
use crate::domain::entities::{GasReporterSettings, ProjectConfiguration, VerificationSettings};
use crate::domain::ports::{ConfigRepository, InputSource};
use crate::domain::services::{
    external_deployments, NetworkRegistry, RegistryCredentials, CATALOG_VERSION,
};
use crate::domain::value_objects::{ConfigWarning, ForkPolicy};
use crate::error::{ForkwiseError, ForkwiseResult};

/// Combine a project file and inputs into the aggregate.
///
/// Validation is limited to what makes the aggregate incomplete or
/// ambiguous: catalog version, endpoint templates, an empty compiler list,
/// and (only under the strict fork policy) an undeclared fork source.
pub fn assemble(
    file: &ProjectFile,
    inputs: ConfigInputs,
    root: &Path,
) -> ForkwiseResult<ProjectConfiguration> {
    if file.networks.catalog != CATALOG_VERSION {
        return Err(ForkwiseError::CatalogVersion {
            expected: CATALOG_VERSION,
            found: file.networks.catalog,
        });
    }
    if file.compilers.is_empty() {
        return Err(ForkwiseError::InvalidConfig {
            file: root.join(PROJECT_FILE_NAME),
            message: "at least one [[compilers]] entry is required".to_string(),
        });
    }

    let credentials = RegistryCredentials {
        deployer: inputs.deployer_key,
        rpc_key: inputs.rpc_key,
    };
    let networks = NetworkRegistry::build(
        file.networks.enabled.as_deref(),
        &file.networks.custom,
        &credentials,
    )?;

    let fork_policy = inputs.fork_policy.unwrap_or_else(|| file.fork.policy());
    if let Some(source) = inputs.fork.source() {
        if !networks.contains(source) {
            match fork_policy {
                ForkPolicy::Strict => {
                    return Err(ForkwiseError::UnknownForkSource {
                        name: source.to_string(),
                    })
                }
                ForkPolicy::Lenient => tracing::warn!(
                    source,
                    "fork source is not a declared network; its records directory may not exist"
                ),
            }
        }
    }

    let paths = file.paths.resolve(root);
    let external = external_deployments(&inputs.fork, &paths.deployments);

    let config = ProjectConfiguration {
        name: project_name(file, root),
        default_network: file.project.default_network.clone(),
        compilers: file.compilers.clone(),
        named_accounts: file.named_accounts.clone(),
        paths,
        networks,
        rpc_key: credentials.rpc_key,
        fork: inputs.fork,
        fork_policy,
        external_deployments: external,
        verification: VerificationSettings {
            enabled: file.verification.enabled,
            api_key: inputs.etherscan_key,
        },
        gas_reporter: GasReporterSettings {
            currency: file.gas_reporter.currency.clone(),
            gas_price: file.gas_reporter.gas_price,
            coinmarketcap: file
                .gas_reporter
                .coinmarketcap
                .then_some(inputs.coinmarketcap_key),
        },
        test_timeout_ms: file.test_runner.timeout_ms,
    };

    tracing::debug!(
        project = %config.name,
        networks = config.networks.len(),
        forking = config.fork.is_active(),
        "project configuration assembled"
    );
    Ok(config)
}

fn project_name(file: &ProjectFile, root: &Path) -> String {
    if let Some(name) = &file.project.name {
        return name.clone();
    }
    root.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "project".to_string())
}

/// Result of resolving a project
#[derive(Debug, Clone)]
pub struct Resolved {
    pub config: ProjectConfiguration,
    pub warnings: Vec<ConfigWarning>,
}

/// Resolve Use Case
///
/// Loads the project file through a [`ConfigRepository`], reads inputs from
/// an [`InputSource`] once, and assembles.
pub struct ResolveUseCase<R, S> {
    repository: R,
    source: S,
}

impl<R: ConfigRepository, S: InputSource> ResolveUseCase<R, S> {
    pub fn new(repository: R, source: S) -> Self {
        Self { repository, source }
    }

    /// Execute the resolution for the project at `root`
    pub fn execute(&self, root: &Path) -> ForkwiseResult<Resolved> {
        let (file, warnings) = self.repository.load_project(root)?;
        let inputs = ConfigInputs::resolve(&self.source);
        let config = assemble(&file, inputs, root)?;
        Ok(Resolved { config, warnings })
    }
}
