//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::{CheckUseCase, ResolveUseCase};
use crate::error::ForkwiseResult;
use crate::infrastructure::{project_source, DotenvSource, LayeredSource, ProcessEnv, TomlConfigRepository};

/// Inputs for a project directory: process environment over `<root>/.env`
pub type ProjectSource = LayeredSource<ProcessEnv, DotenvSource>;

/// Type alias for the concrete ResolveUseCase with all dependencies
pub type ConcreteResolveUseCase = ResolveUseCase<TomlConfigRepository, ProjectSource>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<TomlConfigRepository, ProjectSource>;

/// Create a resolve use case for the project at `root`.
///
/// Fails only when `<root>/.env` exists and cannot be parsed.
pub fn create_resolve_use_case(root: &Path) -> ForkwiseResult<ConcreteResolveUseCase> {
    Ok(ResolveUseCase::new(
        TomlConfigRepository::new(),
        project_source(root)?,
    ))
}

/// Create a check use case for the project at `root`
pub fn create_check_use_case(root: &Path) -> ForkwiseResult<ConcreteCheckUseCase> {
    Ok(CheckUseCase::new(
        TomlConfigRepository::new(),
        project_source(root)?,
    ))
}
