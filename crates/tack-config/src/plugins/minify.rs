use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

/// Minifier options. Keys keep the minifier's own snake_case spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UglifyOptions {
    #[serde(default)]
    pub compress: CompressOptions,

    #[serde(default)]
    pub mangle: MangleOptions,

    #[serde(default)]
    pub beautify: bool,

    /// Keep comments in the output
    #[serde(default)]
    pub comments: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct CompressOptions {
    /// Report dropped code
    pub warnings: bool,
    /// Strip `console.*` calls
    pub drop_console: bool,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            warnings: false,
            drop_console: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct MangleOptions {
    /// Names that must survive mangling
    #[serde(deserialize_with = "identifiers")]
    pub except: Vec<String>,
    /// Drop IE8 workarounds
    pub screw_ie8: bool,
    /// Keep function names intact
    pub keep_fnames: bool,
}

impl MangleOptions {
    /// Options with the given reserved names.
    ///
    /// # Errors
    ///
    /// Every name must be a valid JavaScript identifier.
    pub fn new<I, S>(except: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let except = except
            .into_iter()
            .map(|name| parse_identifier(&name.into()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            except,
            ..Self::default()
        })
    }
}

impl Default for MangleOptions {
    /// Reserves `$` and the chunk loader's `webpackJsonp` global.
    fn default() -> Self {
        Self {
            except: vec!["$".to_string(), "webpackJsonp".to_string()],
            screw_ie8: true,
            keep_fnames: true,
        }
    }
}

/// Parse and validate a JavaScript identifier.
///
/// Must start with a letter, underscore, or dollar sign and contain only
/// letters, numbers, underscores, or dollar signs.
fn parse_identifier(s: &str) -> Result<String> {
    let invalid = |message: String| ConfigError::InvalidValue {
        field: "mangle.except".to_string(),
        message,
    };

    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return Err(invalid("identifier cannot be empty".to_string()));
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(invalid(format!(
            "identifier must start with a letter, underscore, or dollar sign: '{s}'"
        )));
    }

    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(invalid(format!(
            "identifier can only contain letters, numbers, underscores, or dollar signs: '{s}'"
        )));
    }

    Ok(s.to_string())
}

fn identifiers<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|name| parse_identifier(name).map_err(serde::de::Error::custom))
        .collect()
}
