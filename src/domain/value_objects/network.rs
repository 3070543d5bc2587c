//! Network descriptor value object.

use serde::{Deserialize, Serialize};

use super::Secret;

/// How a logical network is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NetworkKind {
    /// Ephemeral in-memory chain started by the deployment tool itself
    InProcess,
    /// Node assumed to be running on this machine
    LocalDaemon,
    /// Anything reached through an endpoint url
    Remote,
}

impl NetworkKind {
    /// Whether descriptors of this kind carry no endpoint by design
    pub fn is_in_process(self) -> bool {
        matches!(self, NetworkKind::InProcess | NetworkKind::LocalDaemon)
    }
}

/// One deployable target, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkDescriptor {
    pub name: String,
    pub kind: NetworkKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    pub accounts: Vec<Secret>,
    pub live: bool,
    pub save_deployments: bool,
}

impl NetworkDescriptor {
    /// Credential values in declaration order
    pub fn credentials(&self) -> Vec<&str> {
        self.accounts.iter().map(Secret::expose).collect()
    }

    /// True if any account fell back to the placeholder key
    pub fn uses_placeholder_key(&self) -> bool {
        self.accounts.iter().any(Secret::is_placeholder)
    }
}
