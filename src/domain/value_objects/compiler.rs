//! Compiler parameter value objects.
//!
//! Values are carried through untouched; the compiler itself is external.

use serde::{Deserialize, Serialize};

/// Optimizer settings for one compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Expected executions per code path. Not clamped.
    #[serde(default = "default_runs")]
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: default_runs(),
        }
    }
}

/// One compiler declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerSettings {
    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub optimizer: OptimizerSettings,
}

impl Default for CompilerSettings {
    fn default() -> Self {
        Self {
            version: default_version(),
            optimizer: OptimizerSettings::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_runs() -> u32 {
    200
}

fn default_version() -> String {
    "0.7.6".to_string()
}
