//! Secret resolution with safe fallbacks.
//!
//! Absence is a normal state (local development has no keys), so nothing
//! here can fail.

use crate::domain::value_objects::{Secret, SecretKind};

/// Return `raw` when it is present and non-empty, otherwise `default`.
pub fn resolve_or_default(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

/// Resolve a named input using the fallback for its kind.
pub fn resolve_secret(name: &str, kind: SecretKind, raw: Option<&str>) -> Secret {
    let supplied = matches!(raw, Some(v) if !v.is_empty());
    if !supplied {
        tracing::debug!(input = name, "input not set, using default");
    }
    let value = resolve_or_default(raw, kind.default_value());
    Secret::new(name, kind, supplied, value)
}
