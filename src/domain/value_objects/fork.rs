//! Fork directive value objects.

use serde::{Deserialize, Serialize};

/// Whether deployment records of another network should be visible to the
/// in-process networks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "source", rename_all = "kebab-case")]
pub enum ForkDirective {
    #[default]
    NoForward,
    /// Name of the network the local chain was forked from
    ForwardFrom(String),
}

impl ForkDirective {
    /// Interpret the raw fork-source input. Absent or empty disables
    /// forwarding; anything else is kept verbatim, whitespace included.
    pub fn from_input(raw: Option<&str>) -> Self {
        match raw {
            Some(name) if !name.is_empty() => ForkDirective::ForwardFrom(name.to_string()),
            _ => ForkDirective::NoForward,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            ForkDirective::NoForward => None,
            ForkDirective::ForwardFrom(name) => Some(name),
        }
    }

    pub fn is_active(&self) -> bool {
        self.source().is_some()
    }
}

/// What to do when the fork source is not a declared network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForkPolicy {
    /// Keep the override path and warn (default)
    #[default]
    Lenient,
    /// Refuse to assemble the configuration
    Strict,
}

impl ForkPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "lenient" => Some(ForkPolicy::Lenient),
            "strict" => Some(ForkPolicy::Strict),
            _ => None,
        }
    }
}
