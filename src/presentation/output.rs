//! Output Rendering
//!
//! Machine-readable encodings for report models. Text rendering lives with
//! the binary's views.

use serde::Serialize;

use crate::error::{ForkwiseError, ForkwiseResult};

/// Output format for rendering
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// YAML output
    Yaml,
}

impl OutputFormat {
    /// `--json` wins over whatever `--format` says
    pub fn effective(format: Option<OutputFormat>, json: bool) -> OutputFormat {
        if json {
            OutputFormat::Json
        } else {
            format.unwrap_or_default()
        }
    }

    pub fn is_text(self) -> bool {
        self == OutputFormat::Text
    }
}

/// Encode `value` as JSON or YAML.
///
/// Returns `None` for [`OutputFormat::Text`], which the caller renders itself.
pub fn encode<T: Serialize>(format: OutputFormat, value: &T) -> ForkwiseResult<Option<String>> {
    let encoded = match format {
        OutputFormat::Text => return Ok(None),
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(encode_error)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value).map_err(encode_error)?,
    };
    Ok(Some(encoded))
}

fn encode_error(e: impl std::fmt::Display) -> ForkwiseError {
    ForkwiseError::Encode(e.to_string())
}
