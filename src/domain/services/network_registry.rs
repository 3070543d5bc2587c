//! Network registry
//!
//! Builds the project's set of [`NetworkDescriptor`]s from the shared catalog,
//! the project's selection and overrides, and the resolved credentials.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::{catalog, CatalogEntry};
use crate::config::closest_match;
use crate::domain::value_objects::{NetworkDescriptor, NetworkKind, Secret};
use crate::error::{ForkwiseError, ForkwiseResult};

/// Template variable for the RPC-provider access key
const RPC_KEY_PLACEHOLDER: &str = "INFURA_KEY";

/// Project-level adjustments to a catalog entry.
///
/// A name that is not in the catalog declares a new remote network; `url`
/// is then required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOverride {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub chain_id: Option<u64>,

    /// Attach the deployer key
    #[serde(default)]
    pub signer: Option<bool>,

    #[serde(default)]
    pub live: Option<bool>,

    #[serde(default)]
    pub save_deployments: Option<bool>,
}

/// Secrets the registry needs to fill descriptors
#[derive(Debug, Clone)]
pub struct RegistryCredentials {
    pub deployer: Secret,
    pub rpc_key: Secret,
}

/// Resolved networks of one project, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NetworkRegistry {
    networks: Vec<NetworkDescriptor>,
}

impl NetworkRegistry {
    /// Build the registry.
    ///
    /// Declared names are `enabled` (or the whole catalog when `None`)
    /// followed by any `custom` names not already listed.
    pub fn build(
        enabled: Option<&[String]>,
        custom: &BTreeMap<String, NetworkOverride>,
        credentials: &RegistryCredentials,
    ) -> ForkwiseResult<Self> {
        let mut names: Vec<String> = match enabled {
            Some(list) => list.to_vec(),
            None => catalog().iter().map(|e| e.name.to_string()).collect(),
        };
        for name in custom.keys() {
            names.push(name.clone());
        }

        let mut networks: Vec<NetworkDescriptor> = Vec::with_capacity(names.len());
        for name in names {
            if networks.iter().any(|n| n.name == name) {
                continue;
            }
            let descriptor = describe(&name, custom.get(&name), credentials)?;
            networks.push(descriptor);
        }

        tracing::debug!(count = networks.len(), "network registry assembled");
        Ok(Self { networks })
    }

    pub fn get(&self, name: &str) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Like [`get`](Self::get) but reports unknown names with a suggestion
    pub fn lookup(&self, name: &str) -> ForkwiseResult<&NetworkDescriptor> {
        self.get(name).ok_or_else(|| ForkwiseError::UnknownNetwork {
            name: name.to_string(),
            suggestion: closest_match(name, self.names()).map(str::to_string),
        })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.networks.iter().map(|n| n.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NetworkDescriptor> {
        self.networks.iter()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

fn describe(
    name: &str,
    custom: Option<&NetworkOverride>,
    credentials: &RegistryCredentials,
) -> ForkwiseResult<NetworkDescriptor> {
    let base = match (CatalogEntry::find(name), custom) {
        (Some(entry), _) => *entry,
        (None, Some(_)) => CatalogEntry {
            name: "",
            kind: NetworkKind::Remote,
            url: None,
            chain_id: None,
            signer: true,
            live: false,
            save_deployments: false,
        },
        (None, None) => {
            return Err(ForkwiseError::UnknownNetwork {
                name: name.to_string(),
                suggestion: closest_match(name, catalog().iter().map(|e| e.name))
                    .map(str::to_string),
            })
        }
    };
    let overrides = custom.cloned().unwrap_or_default();

    let template = overrides.url.as_deref().or(base.url);
    let url = match template {
        Some(t) => Some(expand_endpoint(name, t, credentials)?),
        None if base.kind.is_in_process() => None,
        None => {
            return Err(ForkwiseError::MissingEndpoint {
                network: name.to_string(),
            })
        }
    };

    let signer = overrides.signer.unwrap_or(base.signer);
    let accounts = if signer {
        vec![credentials.deployer.clone()]
    } else {
        Vec::new()
    };

    Ok(NetworkDescriptor {
        name: name.to_string(),
        kind: base.kind,
        url,
        chain_id: overrides.chain_id.or(base.chain_id),
        accounts,
        live: overrides.live.unwrap_or(base.live),
        save_deployments: overrides.save_deployments.unwrap_or(base.save_deployments),
    })
}

/// Substitute `${INFURA_KEY}` in an endpoint template.
///
/// Any other `${...}` (or an unterminated one) is rejected so no template
/// text survives into a descriptor.
pub fn expand_endpoint(
    network: &str,
    template: &str,
    credentials: &RegistryCredentials,
) -> ForkwiseResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ForkwiseError::UnresolvedPlaceholder {
                network: network.to_string(),
                placeholder: after.to_string(),
            });
        };
        let var = &after[..end];
        if var != RPC_KEY_PLACEHOLDER {
            return Err(ForkwiseError::UnresolvedPlaceholder {
                network: network.to_string(),
                placeholder: var.to_string(),
            });
        }
        out.push_str(credentials.rpc_key.expose());
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(out)
}
