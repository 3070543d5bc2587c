//! Config repository port - abstracts loading of the project file.

use std::path::Path;

use crate::config::ProjectFile;
use crate::domain::value_objects::ConfigWarning;
use crate::error::ForkwiseResult;

/// Repository trait for project file loading.
///
/// Abstracts the underlying storage so assembly can be tested without a
/// file system.
pub trait ConfigRepository {
    /// Load a specific file, collecting warnings about unknown keys.
    fn load_with_warnings(&self, path: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)>;

    /// Load `<root>/forkwise.toml`, or built-in defaults when it does not exist.
    fn load_project(&self, root: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)>;

    /// Check if a project file exists at the given path.
    fn exists(&self, path: &Path) -> bool;
}
