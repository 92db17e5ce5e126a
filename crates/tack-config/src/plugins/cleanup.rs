use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Writes an interactive bundle composition report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerOptions {
    /// Report file name, relative to the output directory
    pub filename: String,
}

impl Default for VisualizerOptions {
    fn default() -> Self {
        Self {
            filename: "stats.html".to_string(),
        }
    }
}

/// Deletes directories before the build writes new output.
///
/// Deserialization goes through [`CleanOptions::new`], so a parsed
/// document can never name a path outside its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "CleanRepr")]
pub struct CleanOptions {
    /// Directories to remove
    pub paths: Vec<PathBuf>,

    /// Nothing outside this directory is removed
    pub root: PathBuf,

    #[serde(default)]
    pub verbose: bool,
}

impl CleanOptions {
    /// Clean `paths` under `root`.
    ///
    /// # Errors
    ///
    /// Every path must be absolute, lie inside `root` and not be `root`
    /// itself.
    pub fn new(paths: Vec<PathBuf>, root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        for path in &paths {
            check_within(path, &root)?;
        }
        Ok(Self {
            paths,
            root,
            verbose: true,
        })
    }
}

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
struct CleanRepr {
    paths: Vec<PathBuf>,
    root: PathBuf,
    #[serde(default)]
    verbose: bool,
}

impl TryFrom<CleanRepr> for CleanOptions {
    type Error = ConfigError;

    fn try_from(repr: CleanRepr) -> Result<Self> {
        Ok(Self {
            verbose: repr.verbose,
            ..Self::new(repr.paths, repr.root)?
        })
    }
}

fn check_within(path: &Path, root: &Path) -> Result<()> {
    let invalid = |message: &str| ConfigError::InvalidValue {
        field: "clean.paths".to_string(),
        message: format!("{}: {message}", path.display()),
    };

    if !path.is_absolute() {
        return Err(invalid("must be absolute"));
    }
    if path == root {
        return Err(invalid("refusing to clean the project root"));
    }
    if !path.starts_with(root) {
        return Err(invalid(&format!("outside of {}", root.display())));
    }
    Ok(())
}
