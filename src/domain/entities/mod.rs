//! Domain Entities
//!
//! - `ProjectConfiguration` - everything the deployment tool needs for one invocation

mod project_configuration;

pub use project_configuration::{
    GasReporterSettings, ProjectConfiguration, ResolvedTarget, VerificationSettings,
};
