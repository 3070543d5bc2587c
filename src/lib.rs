//! Forkwise - deployment environment resolver for contract projects
//!
//! Forkwise turns a project file (`forkwise.toml`), a handful of optional
//! environment inputs, and a shared network catalog into one immutable
//! [`ProjectConfiguration`]: compiler settings, project paths, the declared
//! networks with their endpoints and signing credentials, and where to look
//! for published deployment records (including records of a forked network).
//!
//! ```no_run
//! use std::path::Path;
//! use forkwise::presentation::create_resolve_use_case;
//!
//! let root = Path::new(".");
//! let resolved = create_resolve_use_case(root)?.execute(root)?;
//! for path in resolved.config.search_paths("hardhat") {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), forkwise::ForkwiseError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{assemble, CheckUseCase, ResolveUseCase, Resolved};
pub use config::{ConfigInputs, ProjectFile};
pub use domain::entities::ProjectConfiguration;
pub use domain::ports::InputSource;
pub use domain::value_objects::{ForkDirective, ForkPolicy, NetworkDescriptor, Secret};
pub use error::{ForkwiseError, ForkwiseResult};
