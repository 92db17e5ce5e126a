use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::FilenameTemplate;

/// Pulls style chains out of the JS bundle into standalone files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ExtractTextOptions {
    pub filename: FilenameTemplate,
}

impl ExtractTextOptions {
    pub fn new(filename: &str) -> Result<Self> {
        Ok(Self {
            filename: FilenameTemplate::parse(filename)?,
        })
    }
}

impl Default for ExtractTextOptions {
    fn default() -> Self {
        Self {
            filename: FilenameTemplate::known("[name][chunkhash].css"),
        }
    }
}

/// Removes selectors that never appear in the scanned sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PurifyCssOptions {
    /// Directory the scanned paths are reported relative to
    pub base_path: PathBuf,

    /// Sources scanned for used selectors
    pub paths: Vec<PathBuf>,

    /// Print how much was removed
    #[serde(default)]
    pub info: bool,
}

impl PurifyCssOptions {
    pub fn new(base_path: impl Into<PathBuf>, paths: Vec<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            paths,
            info: true,
        }
    }
}
