//! Fork forwarding
//!
//! When the local chain is a fork of another network, the in-process
//! networks must also see the deployment records published on that network.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ForkDirective;

/// Networks whose record lookup is extended while forking
pub const FORWARDED_NETWORKS: [&str; 2] = ["hardhat", "localhost"];

/// Extra record directories per network
pub type ExternalDeployments = BTreeMap<String, Vec<PathBuf>>;

/// Compute the record-lookup override for a fork directive.
///
/// The source name is used as a raw path segment. Whether it names a real
/// network is the caller's concern.
pub fn external_deployments(directive: &ForkDirective, records_root: &Path) -> ExternalDeployments {
    let Some(source) = directive.source() else {
        return ExternalDeployments::new();
    };

    let forked = forked_records(records_root, source);
    FORWARDED_NETWORKS
        .iter()
        .map(|network| (network.to_string(), vec![forked.clone()]))
        .collect()
}

/// `<records_root>/<source>`. Leading separators are dropped so an
/// absolute name cannot replace the root.
fn forked_records(records_root: &Path, source: &str) -> PathBuf {
    records_root.join(source.trim_start_matches(['/', '\\']))
}

/// Record directories to search for `network`: its own first, then any
/// external ones. No duplicates.
pub fn search_paths(
    network: &str,
    records_root: &Path,
    external: &ExternalDeployments,
) -> Vec<PathBuf> {
    let mut paths = vec![records_root.join(network)];
    if let Some(extra) = external.get(network) {
        for path in extra {
            if !paths.contains(path) {
                paths.push(path.clone());
            }
        }
    }
    paths
}
