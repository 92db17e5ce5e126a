use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::module::FilePattern;

/// Module names matching this are saved as development dependencies.
const DEV_DEPENDENCY_PATTERN: &str = r"(^babel-?.*|.*-plugin$|.*-loader)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct HotModuleReplacementOptions {
    /// Build in two steps so the update manifest matches the new chunks
    pub multi_step: bool,
}

impl Default for HotModuleReplacementOptions {
    fn default() -> Self {
        Self { multi_step: true }
    }
}

/// Installs missing modules while the dev server runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NpmInstallOptions {
    /// Modules matching this are saved with `--save-dev`
    pub dev: FilePattern,
}

impl NpmInstallOptions {
    pub fn new(dev: FilePattern) -> Self {
        Self { dev }
    }

    /// Babel packages, plugins and loaders go to `devDependencies`.
    pub fn tooling() -> Result<Self> {
        Ok(Self::new(FilePattern::new(DEV_DEPENDENCY_PATTERN)?))
    }

    /// Whether an auto-installed module belongs in `devDependencies`.
    pub fn is_dev_dependency(&self, module: &str) -> bool {
        self.dev.is_match(module)
    }
}
