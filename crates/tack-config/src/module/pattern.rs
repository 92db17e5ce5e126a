use std::borrow::Cow;
use std::fmt;

use regex::{Regex, RegexBuilder};
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A file-matching regular expression, written the way the bundler expects
/// it (`/\.css$/`, `/\.(png|svg)$/i`).
///
/// The expression is compiled when the pattern is constructed, so an invalid
/// pattern never reaches the final configuration.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FilePattern {
    source: String,
    case_insensitive: bool,
    regex: Regex,
}

impl FilePattern {
    /// Compile a case-sensitive pattern from its source.
    pub fn new(source: &str) -> Result<Self> {
        Self::build(source, false)
    }

    /// Compile a pattern that ignores case (the `i` flag).
    pub fn case_insensitive(source: &str) -> Result<Self> {
        Self::build(source, true)
    }

    /// Parse the literal form `/source/flags`. Only the `i` flag is supported.
    pub fn parse_literal(literal: &str) -> Result<Self> {
        let invalid = |message: &str| ConfigError::InvalidPattern {
            pattern: literal.to_string(),
            message: message.to_string(),
        };

        let body = literal
            .strip_prefix('/')
            .ok_or_else(|| invalid("pattern literal must start with '/'"))?;
        let end = body
            .rfind('/')
            .ok_or_else(|| invalid("pattern literal must end with '/' and optional flags"))?;
        let (source, flags) = (&body[..end], &body[end + 1..]);

        match flags {
            "" => Self::new(source),
            "i" => Self::case_insensitive(source),
            other => Err(invalid(&format!("unsupported flags '{other}'"))),
        }
    }

    fn build(source: &str, case_insensitive: bool) -> Result<Self> {
        if source.is_empty() {
            return Err(ConfigError::InvalidPattern {
                pattern: source.to_string(),
                message: "pattern cannot be empty".to_string(),
            });
        }
        let regex = RegexBuilder::new(source)
            .case_insensitive(case_insensitive)
            .build()
            .map_err(|e| ConfigError::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self {
            source: source.to_string(),
            case_insensitive,
            regex,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

impl fmt::Display for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = if self.case_insensitive { "i" } else { "" };
        write!(f, "/{}/{}", self.source, flags)
    }
}

impl fmt::Debug for FilePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FilePattern({self})")
    }
}

impl PartialEq for FilePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for FilePattern {}

impl TryFrom<String> for FilePattern {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_literal(&value)
    }
}

impl From<FilePattern> for String {
    fn from(pattern: FilePattern) -> Self {
        pattern.to_string()
    }
}

impl JsonSchema for FilePattern {
    fn schema_name() -> Cow<'static, str> {
        "FilePattern".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^/.+/i?$"
        })
    }
}
