//! Test environment builder for isolated Forkwise testing.
//!
//! Provides `TestEnv` - a temp project directory and helpers to run the
//! `forkwise` binary against it with a controlled set of inputs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Inputs the binary reads; always cleared so the host environment can't leak in
const INPUT_VARS: &[&str] = &[
    "RINKEBY_PRIVATE_KEY",
    "ETHERSCAN_API_KEY",
    "COINMARKETCAP_API_KEY",
    "INFURA_KEY",
    "HARDHAT_FORK",
    "FORKWISE_FORK_POLICY",
    "FORKWISE_LOG",
];

/// Result of running a Forkwise CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }

    /// Non-empty stdout lines
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().filter(|l| !l.is_empty()).collect()
    }
}

/// Isolated project directory
pub struct TestEnv {
    pub project_root: TempDir,
    env_vars: Vec<(String, String)>,
    forkwise_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Canonical project root, as the binary reports paths
    pub fn canonical_root(&self) -> PathBuf {
        self.project_root
            .path()
            .canonicalize()
            .expect("Failed to canonicalize project root")
    }

    /// Records directory of `network` under the canonical root
    pub fn records_dir(&self, network: &str) -> PathBuf {
        self.canonical_root().join("deployments").join(network)
    }

    /// Run forkwise in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra env vars on top of the builder's
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run from a specific directory
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.forkwise_bin);
        cmd.current_dir(cwd).args(args).env("NO_COLOR", "1");
        for var in INPUT_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute forkwise");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
#[derive(Default)]
pub struct TestEnvBuilder {
    project_config: Option<String>,
    dotenv: Option<String>,
    env_vars: Vec<(String, String)>,
    deployments: Vec<String>,
    init_git: bool,
}

impl TestEnvBuilder {
    /// Write `forkwise.toml` with this content
    pub fn with_project_config(mut self, content: &str) -> Self {
        self.project_config = Some(content.to_string());
        self
    }

    /// Write `.env` with this content
    pub fn with_dotenv(mut self, content: &str) -> Self {
        self.dotenv = Some(content.to_string());
        self
    }

    /// Set a process environment variable for every run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env_vars.push((key.to_string(), value.to_string()));
        self
    }

    /// Create `deployments/<network>/` with a placeholder record
    pub fn with_deployments(mut self, network: &str) -> Self {
        self.deployments.push(network.to_string());
        self
    }

    /// Mark the project root with a `.git` directory
    pub fn with_git(mut self) -> Self {
        self.init_git = true;
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = TempDir::new().expect("Failed to create temp project dir");
        let env = TestEnv {
            project_root,
            env_vars: self.env_vars,
            forkwise_bin: PathBuf::from(env!("CARGO_BIN_EXE_forkwise")),
        };

        if let Some(config) = &self.project_config {
            env.write_project_file("forkwise.toml", config);
        }
        if let Some(dotenv) = &self.dotenv {
            env.write_project_file(".env", dotenv);
        }
        for network in &self.deployments {
            env.write_project_file(
                &format!("deployments/{}/.chainId", network),
                "1\n",
            );
        }
        if self.init_git {
            std::fs::create_dir_all(env.project_path(".git")).expect("Failed to create .git");
        }

        env
    }
}
