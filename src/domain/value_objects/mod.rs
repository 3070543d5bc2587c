//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod compiler;
mod config_warning;
mod fork;
mod network;
mod paths;
mod secret;

pub use compiler::{CompilerSettings, OptimizerSettings};
pub use config_warning::ConfigWarning;
pub use fork::{ForkDirective, ForkPolicy};
pub use network::{NetworkDescriptor, NetworkKind};
pub use paths::ProjectPaths;
pub use secret::{Secret, SecretKind, PLACEHOLDER_SIGNING_KEY};
