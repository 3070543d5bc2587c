use std::path::{Path, PathBuf};

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `forkwise.toml`
/// - `hardhat.config.ts` / `hardhat.config.js`
/// - `.git/` or `.git` file (git repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(forkwise::config::PROJECT_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join("hardhat.config.ts").is_file() || dir.join("hardhat.config.js").is_file() {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
