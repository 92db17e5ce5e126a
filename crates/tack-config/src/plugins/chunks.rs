use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ConfigError, Result};

/// Splits shared modules into their own chunks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", try_from = "CommonsChunkRepr")]
pub struct CommonsChunkOptions {
    /// Chunk names, in order; the last one receives the runtime manifest
    pub names: Vec<String>,

    pub min_chunks: MinChunks,
}

impl CommonsChunkOptions {
    pub fn new<I, S>(names: I, min_chunks: MinChunks) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "commonsChunk.names".to_string(),
                message: "at least one chunk name is required".to_string(),
            });
        }
        if let Some(blank) = names.iter().find(|n| n.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "commonsChunk.names".to_string(),
                message: format!("invalid chunk name '{blank}'"),
            });
        }
        Ok(Self { names, min_chunks })
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CommonsChunkRepr {
    names: Vec<String>,
    min_chunks: MinChunks,
}

impl TryFrom<CommonsChunkRepr> for CommonsChunkOptions {
    type Error = ConfigError;

    fn try_from(repr: CommonsChunkRepr) -> Result<Self> {
        Self::new(repr.names, repr.min_chunks)
    }
}

/// `vendor` plus a separate runtime `manifest` chunk, so vendor hashes only
/// change when dependencies do.
impl Default for CommonsChunkOptions {
    fn default() -> Self {
        Self {
            names: vec!["vendor".to_string(), "manifest".to_string()],
            min_chunks: MinChunks::Infinity,
        }
    }
}

/// How many chunks must share a module before it moves to the common chunk.
///
/// `Infinity` keeps everything out except the chunk's own entry modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinChunks {
    Count(u32),
    Infinity,
}

impl MinChunks {
    pub fn count(count: u32) -> Result<Self> {
        if count < 2 {
            return Err(ConfigError::InvalidValue {
                field: "minChunks".to_string(),
                message: format!("must be at least 2, got {count}"),
            });
        }
        Ok(Self::Count(count))
    }
}

impl fmt::Display for MinChunks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Infinity => f.write_str("Infinity"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum MinChunksRepr {
    Count(u32),
    Named(String),
}

impl Serialize for MinChunks {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => MinChunksRepr::Count(*n),
            Self::Infinity => MinChunksRepr::Named("Infinity".to_string()),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MinChunks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match MinChunksRepr::deserialize(deserializer)? {
            MinChunksRepr::Count(n) => Self::count(n).map_err(serde::de::Error::custom),
            MinChunksRepr::Named(name) if name == "Infinity" => Ok(Self::Infinity),
            MinChunksRepr::Named(other) => Err(serde::de::Error::custom(format!(
                "expected a count or \"Infinity\", got \"{other}\""
            ))),
        }
    }
}

impl JsonSchema for MinChunks {
    fn schema_name() -> Cow<'static, str> {
        "MinChunks".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "integer", "minimum": 2 },
                { "const": "Infinity" }
            ]
        })
    }
}
