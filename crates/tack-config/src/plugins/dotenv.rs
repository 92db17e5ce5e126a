use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Build-time substitution of `process.env.*` from env files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DotenvOptions {
    /// Declares every variable and its default value
    pub sample: PathBuf,

    /// Local overrides; may be absent
    pub path: PathBuf,
}

impl DotenvOptions {
    pub fn new(sample: impl Into<PathBuf>, path: impl Into<PathBuf>) -> Self {
        Self {
            sample: sample.into(),
            path: path.into(),
        }
    }

    /// Resolve the variables the plugin would substitute.
    ///
    /// Every key declared in the sample file is resolved, the override file
    /// winning over the sample's default. Keys only present in the override
    /// file are ignored.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EnvFile`] when the sample file is missing or either
    ///   file is malformed
    /// - [`ConfigError::MissingEnvVars`] listing every key that resolves to
    ///   an empty value
    pub fn resolve(&self) -> Result<ResolvedEnv> {
        let defaults = read_env_file(&self.sample)?;

        let overrides = if self.path.exists() {
            read_env_file(&self.path)?
        } else {
            tracing::debug!(path = %self.path.display(), "no env override file");
            IndexMap::new()
        };

        let mut vars = IndexMap::with_capacity(defaults.len());
        let mut missing = Vec::new();
        for (key, default) in defaults {
            let value = overrides.get(&key).cloned().unwrap_or(default);
            if value.is_empty() {
                missing.push(key);
            } else {
                vars.insert(key, value);
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingEnvVars(missing));
        }

        tracing::debug!(
            sample = %self.sample.display(),
            variables = vars.len(),
            "resolved env files"
        );
        Ok(ResolvedEnv { vars })
    }
}

fn read_env_file(path: &Path) -> Result<IndexMap<String, String>> {
    let env_error = |message: String| ConfigError::EnvFile {
        path: path.to_path_buf(),
        message,
    };

    dotenvy::from_path_iter(path)
        .map_err(|e| env_error(e.to_string()))?
        .map(|item| item.map_err(|e| env_error(e.to_string())))
        .collect()
}

/// Variables resolved from env files, in sample-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedEnv {
    vars: IndexMap<String, String>,
}

impl ResolvedEnv {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replacements as the bundler's define step takes them:
    /// `process.env.KEY` mapped to the JSON-quoted value.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tack_config::DotenvOptions;
    ///
    /// let env = DotenvOptions::new(".env.default", ".env").resolve().unwrap();
    /// for (key, value) in env.defines() {
    ///     println!("{key} => {value}");
    /// }
    /// ```
    pub fn defines(&self) -> IndexMap<String, String> {
        self.vars
            .iter()
            .map(|(key, value)| {
                (
                    format!("process.env.{key}"),
                    Value::String(value.clone()).to_string(),
                )
            })
            .collect()
    }
}
