//! Secret Value Object
//!
//! A named external input (signing key or API key) together with the value
//! it resolved to. The resolved value is always well-formed for its kind,
//! even when nothing was supplied.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Placeholder deployer key: 32 zero bytes, hex encoded.
///
/// Zero is not a valid secp256k1 scalar, so this can never control an account.
pub const PLACEHOLDER_SIGNING_KEY: &str =
    "0000000000000000000000000000000000000000000000000000000000000000";

/// Role of a secret, which decides its fallback shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretKind {
    /// Account private key, falls back to [`PLACEHOLDER_SIGNING_KEY`]
    SigningKey,
    /// Third-party service key, falls back to the empty string
    ApiKey,
}

impl SecretKind {
    /// Canonical degenerate value for this kind
    pub fn default_value(self) -> &'static str {
        match self {
            SecretKind::SigningKey => PLACEHOLDER_SIGNING_KEY,
            SecretKind::ApiKey => "",
        }
    }
}

/// A resolved secret.
///
/// `Debug` never prints the value. `Serialize` does, because the serialized
/// aggregate is what the deployment tool consumes.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    name: String,
    kind: SecretKind,
    supplied: bool,
    value: String,
}

impl Secret {
    /// Build a secret from an already-resolved value.
    ///
    /// Use `domain::services::resolve_secret` to apply fallback rules.
    pub(crate) fn new(name: impl Into<String>, kind: SecretKind, supplied: bool, value: String) -> Self {
        Self {
            name: name.into(),
            kind,
            supplied,
            value,
        }
    }

    /// Name of the external input this came from
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    /// The resolved value
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// True when the input was absent or empty and the default was used
    pub fn is_defaulted(&self) -> bool {
        !self.supplied
    }

    /// True when the value is the non-functional fallback for its kind
    pub fn is_placeholder(&self) -> bool {
        self.value == self.kind.default_value()
    }

    /// Human-readable form that never reveals the value
    pub fn redacted(&self) -> String {
        if self.is_defaulted() {
            return match self.kind {
                SecretKind::SigningKey => "<placeholder>".to_string(),
                SecretKind::ApiKey => "<unset>".to_string(),
            };
        }
        let len = self.value.chars().count();
        if len <= 8 {
            return "*".repeat(len);
        }
        let head: String = self.value.chars().take(4).collect();
        format!("{}…({} chars)", head, len)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value", &self.redacted())
            .finish()
    }
}

impl Serialize for Secret {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}
