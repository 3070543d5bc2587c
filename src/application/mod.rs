//! Application Layer
//!
//! Use cases that orchestrate the resolution flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ResolveUseCase` - Load the project file, read inputs, assemble
//! - `CheckUseCase` - Diagnose configuration without deploying
//!
//! ## Services
//!
//! - `assemble` - Pure assembly of a `ProjectConfiguration`

pub mod check;
pub mod resolve;

pub use check::{CheckItem, CheckOptions, CheckResult, CheckStatus, CheckUseCase};
pub use resolve::{assemble, Resolved, ResolveUseCase};
