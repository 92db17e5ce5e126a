//! Dependency manifest (`package.json`) loading.
//!
//! Only the fields the configuration needs are parsed. Dependency maps keep
//! their manifest order, since vendor chunk membership follows it.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

/// Maximum allowed size for manifest files (10MB)
const MAX_MANIFEST_SIZE: u64 = 10 * 1024 * 1024;

/// Parsed `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Package name
    #[serde(default)]
    pub name: Option<String>,
    /// Package version
    #[serde(default)]
    pub version: Option<String>,
    /// Runtime dependencies, in declaration order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependencies: IndexMap<String, String>,
    /// File path this was loaded from
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl PackageManifest {
    /// Load a manifest from disk.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read, is larger than 10MB, or is not
    /// valid JSON. A manifest without `dependencies` is not an error.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|source| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() > MAX_MANIFEST_SIZE {
            return Err(ConfigError::ManifestTooLarge {
                path: path.to_path_buf(),
                limit: MAX_MANIFEST_SIZE,
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let mut manifest = Self::parse(&content).map_err(|err| match err {
            ConfigError::ManifestParse { message, .. } => ConfigError::ManifestParse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        manifest.path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            dependencies = manifest.dependencies.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse manifest JSON that did not come from a file.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ManifestParse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Modules that make up the vendor chunk: every runtime dependency, in
    /// manifest order.
    pub fn vendor_modules(&self) -> Vec<String> {
        self.dependencies.keys().cloned().collect()
    }

    /// Builder-style helper, mostly for tests and programmatic callers.
    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}
