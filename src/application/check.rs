//! Check Use Case
//!
//! Diagnoses a project's configuration without deploying anything.

use std::path::Path;

use serde::Serialize;

use crate::config::{ConfigInputs, DEPLOYER_KEY_VAR, ETHERSCAN_KEY_VAR, PROJECT_FILE_NAME};
use crate::domain::entities::ProjectConfiguration;
use crate::domain::ports::{ConfigRepository, InputSource};
use crate::domain::value_objects::ConfigWarning;
use crate::error::ForkwiseResult;

use super::resolve::assemble;

/// Options for the check operation
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Treat warnings as errors
    pub strict_warnings: bool,
}

/// Result of a single check
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CheckItem {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            recommendation: None,
            details: Vec::new(),
        }
    }

    fn recommend(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }

    fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

/// Status of a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

/// Result of the check operation
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckResult {
    pub items: Vec<CheckItem>,
    pub passed: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl CheckResult {
    /// No errors
    pub fn is_success(&self) -> bool {
        self.errors == 0
    }

    /// No errors and no warnings
    pub fn is_clean(&self) -> bool {
        self.errors == 0 && self.warnings == 0
    }

    /// Whether the command should exit non-zero
    pub fn fails(&self, options: CheckOptions) -> bool {
        !self.is_success() || (options.strict_warnings && self.warnings > 0)
    }

    fn push(&mut self, item: CheckItem) {
        match item.status {
            CheckStatus::Pass => self.passed += 1,
            CheckStatus::Warning => self.warnings += 1,
            CheckStatus::Error => self.errors += 1,
        }
        self.items.push(item);
    }
}

/// Check Use Case
pub struct CheckUseCase<R, S> {
    repository: R,
    source: S,
}

impl<R: ConfigRepository, S: InputSource> CheckUseCase<R, S> {
    pub fn new(repository: R, source: S) -> Self {
        Self { repository, source }
    }

    /// Run every check for the project at `root`.
    ///
    /// Configuration problems become items; only I/O failures outside the
    /// project file are returned as errors.
    pub fn execute(&self, root: &Path) -> ForkwiseResult<CheckResult> {
        self.execute_with_callback(root, |_| {})
    }

    /// Execute with a callback for each check (for streaming UI)
    pub fn execute_with_callback<F>(&self, root: &Path, mut on_check: F) -> ForkwiseResult<CheckResult>
    where
        F: FnMut(&CheckItem),
    {
        let mut result = CheckResult::default();
        let mut record = |result: &mut CheckResult, item: CheckItem| {
            on_check(&item);
            result.push(item);
        };

        let file_path = root.join(PROJECT_FILE_NAME);
        let (file, warnings) = match self.repository.load_project(root) {
            Ok(loaded) => loaded,
            Err(e) => {
                record(
                    &mut result,
                    CheckItem::new("project file", CheckStatus::Error, e.to_string()),
                );
                return Ok(result);
            }
        };

        let file_item = if self.repository.exists(&file_path) {
            CheckItem::new(
                "project file",
                CheckStatus::Pass,
                format!("{} parsed", file_path.display()),
            )
        } else {
            CheckItem::new(
                "project file",
                CheckStatus::Pass,
                format!("no {PROJECT_FILE_NAME}, using built-in defaults"),
            )
        };
        record(&mut result, file_item);
        record(&mut result, unknown_keys(&warnings));

        let config = match assemble(&file, ConfigInputs::resolve(&self.source), root) {
            Ok(config) => config,
            Err(e) => {
                record(
                    &mut result,
                    CheckItem::new("assembly", CheckStatus::Error, e.to_string()),
                );
                return Ok(result);
            }
        };
        record(
            &mut result,
            CheckItem::new(
                "assembly",
                CheckStatus::Pass,
                format!("{} networks resolved", config.networks.len()),
            ),
        );

        for item in [
            default_network(&config),
            fork_source(&config),
            signing_key(&config),
            verification_key(&config),
        ] {
            record(&mut result, item);
        }

        Ok(result)
    }
}

fn unknown_keys(warnings: &[ConfigWarning]) -> CheckItem {
    if warnings.is_empty() {
        return CheckItem::new("unknown keys", CheckStatus::Pass, "none");
    }
    CheckItem::new(
        "unknown keys",
        CheckStatus::Warning,
        format!("{} unknown key(s) ignored", warnings.len()),
    )
    .with_details(warnings.iter().map(ToString::to_string).collect())
}

fn default_network(config: &ProjectConfiguration) -> CheckItem {
    match config.network(&config.default_network) {
        Ok(_) => CheckItem::new(
            "default network",
            CheckStatus::Pass,
            format!("'{}' is declared", config.default_network),
        ),
        Err(e) => CheckItem::new("default network", CheckStatus::Error, e.to_string())
            .recommend("set [project] default_network to a declared network"),
    }
}

fn fork_source(config: &ProjectConfiguration) -> CheckItem {
    match config.fork.source() {
        None => CheckItem::new("fork", CheckStatus::Pass, "not forking"),
        Some(source) if config.fork_source_is_declared() => CheckItem::new(
            "fork",
            CheckStatus::Pass,
            format!("forwarding records from '{source}'"),
        ),
        Some(source) => CheckItem::new(
            "fork",
            CheckStatus::Warning,
            format!("fork source '{source}' is not a declared network"),
        )
        .recommend("check HARDHAT_FORK for typos, or set [fork] strict = true to reject it"),
    }
}

fn signing_key(config: &ProjectConfiguration) -> CheckItem {
    let exposed = config.live_networks_without_key();
    if exposed.is_empty() {
        return CheckItem::new(
            "signing key",
            CheckStatus::Pass,
            "live networks have a deployer key",
        );
    }
    CheckItem::new(
        "signing key",
        CheckStatus::Warning,
        format!("{} live network(s) would sign with the placeholder key", exposed.len()),
    )
    .recommend(format!("set {DEPLOYER_KEY_VAR} in the environment or .env"))
    .with_details(exposed.iter().map(|n| n.name.clone()).collect())
}

fn verification_key(config: &ProjectConfiguration) -> CheckItem {
    if !config.verification.enabled {
        return CheckItem::new("verification", CheckStatus::Pass, "disabled");
    }
    if config.verification.api_key.is_defaulted() {
        return CheckItem::new(
            "verification",
            CheckStatus::Warning,
            "verification enabled without an API key",
        )
        .recommend(format!("set {ETHERSCAN_KEY_VAR}"));
    }
    CheckItem::new("verification", CheckStatus::Pass, "API key present")
}
