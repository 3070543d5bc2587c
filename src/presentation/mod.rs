//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Report models and their JSON/YAML encodings
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Output formats
//! - `report` - Display-ready views with secret redaction
//!
//! ## Usage
//!
//! ```ignore
//! use forkwise::presentation::factory;
//!
//! let resolved = factory::create_resolve_use_case(root)?.execute(root)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;
pub mod report;

pub use factory::{create_check_use_case, create_resolve_use_case};
pub use output::OutputFormat;
pub use report::{network_reports, NetworkReport, PathsReport, SecretDisplay, ShowReport};
