//! Project file loading

use std::fs;
use std::path::Path;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ForkwiseError, ForkwiseResult};

use super::env_validator::closest_match;
use super::types::{ProjectFile, PROJECT_FILE_NAME};

/// Load a project file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse file content; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let file: ProjectFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ForkwiseError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.rsplit('.').next().unwrap_or(key.as_str()).to_string();
            ConfigWarning {
                line: find_line_number(content, &leaf),
                suggestion: closest_match(&leaf, KNOWN_KEYS.iter().copied()).map(str::to_string),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    for warning in &warnings {
        tracing::warn!(%warning, "ignoring unknown config key");
    }

    Ok((file, warnings))
}

/// Load `<root>/forkwise.toml`, falling back to built-in defaults.
///
/// A file that exists but does not parse is an error, not a fallback.
pub fn load_or_default(root: &Path) -> ForkwiseResult<(ProjectFile, Vec<ConfigWarning>)> {
    let path = root.join(PROJECT_FILE_NAME);
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading project file");
        return load_with_warnings(&path);
    }

    tracing::debug!(root = %root.display(), "no project file, using defaults");
    Ok((ProjectFile::default(), Vec::new()))
}

const KNOWN_KEYS: &[&str] = &[
    "project",
    "name",
    "default_network",
    "compilers",
    "version",
    "optimizer",
    "enabled",
    "runs",
    "named_accounts",
    "paths",
    "sources",
    "tests",
    "cache",
    "artifacts",
    "deployments",
    "typechain",
    "networks",
    "catalog",
    "custom",
    "url",
    "chain_id",
    "signer",
    "live",
    "save_deployments",
    "fork",
    "strict",
    "verification",
    "gas_reporter",
    "currency",
    "gas_price",
    "coinmarketcap",
    "test_runner",
    "timeout_ms",
];

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}
