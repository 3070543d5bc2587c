//! Project directory conventions.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directories of one project, joined onto the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
    /// Records root: one subdirectory of published deployments per network
    pub deployments: PathBuf,
    /// Output directory for generated contract bindings
    pub typechain: PathBuf,
}

impl ProjectPaths {
    /// Default layout under `root`
    pub fn conventional(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            sources: root.join("contracts"),
            tests: root.join("test"),
            cache: root.join("cache"),
            artifacts: root.join("artifacts"),
            deployments: root.join("deployments"),
            typechain: root.join("typechain"),
        }
    }

    /// A network's own records directory
    pub fn records_dir(&self, network: &str) -> PathBuf {
        self.deployments.join(network)
    }
}
