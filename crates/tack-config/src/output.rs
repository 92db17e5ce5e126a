//! Output naming.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Placeholders the bundler substitutes in output file names.
const PLACEHOLDERS: &[&str] = &["name", "id", "hash", "chunkhash", "contenthash", "ext"];

/// Placeholders that accept a `:length` suffix.
const HASH_PLACEHOLDERS: &[&str] = &["hash", "chunkhash", "contenthash"];

/// An output file name pattern such as `[name].[chunkhash].js`.
///
/// Placeholders are checked when the template is parsed; an unknown or
/// unterminated placeholder is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let invalid = |message: String| ConfigError::InvalidTemplate {
            template: template.to_string(),
            message,
        };

        if template.trim().is_empty() {
            return Err(invalid("template cannot be empty".to_string()));
        }

        for placeholder in placeholders(template)? {
            let (name, length) = match placeholder.split_once(':') {
                Some((name, length)) => (name, Some(length)),
                None => (placeholder, None),
            };

            if !PLACEHOLDERS.contains(&name) {
                return Err(invalid(format!("unknown placeholder [{placeholder}]")));
            }

            if let Some(length) = length {
                if !HASH_PLACEHOLDERS.contains(&name) {
                    return Err(invalid(format!("[{name}] does not take a length")));
                }
                if length.parse::<u8>().map_or(true, |n| n == 0) {
                    return Err(invalid(format!("invalid hash length '{length}'")));
                }
            }
        }

        Ok(Self(template.to_string()))
    }

    /// Built-in templates that are known to parse.
    pub(crate) fn known(template: &'static str) -> Self {
        debug_assert!(Self::parse(template).is_ok(), "invalid built-in template {template}");
        Self(template.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn placeholders(template: &str) -> Result<Vec<&str>> {
    let mut found = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('[') {
        let after = &rest[start + 1..];
        let end = after.find(']').ok_or_else(|| ConfigError::InvalidTemplate {
            template: template.to_string(),
            message: "unterminated placeholder".to_string(),
        })?;
        found.push(&after[..end]);
        rest = &after[end + 1..];
    }
    Ok(found)
}

impl fmt::Display for FilenameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for FilenameTemplate {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<FilenameTemplate> for String {
    fn from(template: FilenameTemplate) -> Self {
        template.0
    }
}

impl JsonSchema for FilenameTemplate {
    fn schema_name() -> Cow<'static, str> {
        "FilenameTemplate".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "minLength": 1
        })
    }
}

/// Where bundles land and how they are named.
///
/// Fields are optional so fragments can each contribute part of the section;
/// the validator requires `path` and `filename` on the merged result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OutputOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<FilenameTemplate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_filename: Option<FilenameTemplate>,
}
