//! Domain Services
//!
//! Pure resolution logic. No I/O; inputs arrive already read.

mod catalog;
mod fork_forwarder;
mod network_registry;
mod secret_resolver;

pub use catalog::{catalog, CatalogEntry, CATALOG_VERSION};
pub use fork_forwarder::{external_deployments, search_paths, ExternalDeployments, FORWARDED_NETWORKS};
pub use network_registry::{expand_endpoint, NetworkOverride, NetworkRegistry, RegistryCredentials};
pub use secret_resolver::{resolve_or_default, resolve_secret};
