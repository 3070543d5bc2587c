//! TOML-based configuration repository implementation.

use std::path::Path;

use crate::config::ProjectFile;
use crate::domain::ports::ConfigRepository;
use crate::domain::value_objects::ConfigWarning;
use crate::error::ForkwiseResult;

/// TOML project file repository.
///
/// Delegates to the `ProjectFile` loaders, providing a trait-based
/// abstraction for dependency injection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlConfigRepository;

impl TomlConfigRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load_with_warnings(&self, path: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)> {
        ProjectFile::load_with_warnings(path)
    }

    fn load_project(&self, root: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)> {
        ProjectFile::load_or_default(root)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
