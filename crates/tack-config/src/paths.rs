//! Project path resolution.
//!
//! Paths are joined lexically onto an absolute project root and normalized.
//! Nothing here touches the filesystem; missing files surface later in
//! [`FsValidator`](crate::validation::FsValidator) or in the bundler itself.

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::Serialize;

use crate::error::{ConfigError, Result};

pub const ENTRY_SOURCE: &str = "src/index.js";
pub const OUTPUT_DIR: &str = "build";
pub const STYLE_RESET_PACKAGE: &str = "purecss";
pub const MAIN_STYLESHEET: &str = "src/css/main.css";
pub const ENV_DEFAULTS_FILE: &str = ".env.default";
pub const ENV_OVERRIDES_FILE: &str = ".env";
pub const MANIFEST_FILE: &str = "package.json";

/// Absolute locations of everything the configuration refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPaths {
    pub root: PathBuf,
    pub entry: PathBuf,
    pub output_dir: PathBuf,
    /// Style entries in bundle order: the CSS reset first, then the project stylesheet.
    pub styles: Vec<PathBuf>,
    pub env_defaults: PathBuf,
    pub env_overrides: PathBuf,
    pub manifest: PathBuf,
}

impl ProjectPaths {
    /// Resolve the conventional project layout under `root`.
    ///
    /// # Example
    ///
    /// ```
    /// use tack_config::ProjectPaths;
    /// use std::path::Path;
    ///
    /// # #[cfg(unix)] {
    /// let paths = ProjectPaths::resolve("/work/app").unwrap();
    /// assert_eq!(paths.entry, Path::new("/work/app/src/index.js"));
    /// assert_eq!(paths.output_dir, Path::new("/work/app/build"));
    /// # }
    /// ```
    pub fn resolve(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_absolute() {
            return Err(ConfigError::RelativeRoot(root.to_path_buf()));
        }
        let root = root.to_path_buf().clean();
        let join = |relative: &str| root.join(relative).clean();

        Ok(Self {
            entry: join(ENTRY_SOURCE),
            output_dir: join(OUTPUT_DIR),
            styles: vec![
                root.join("node_modules").join(STYLE_RESET_PACKAGE).clean(),
                join(MAIN_STYLESHEET),
            ],
            env_defaults: join(ENV_DEFAULTS_FILE),
            env_overrides: join(ENV_OVERRIDES_FILE),
            manifest: join(MANIFEST_FILE),
            root,
        })
    }

    /// Resolve relative to the current working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::resolve(cwd)
    }

    /// Resolve an optional user-supplied root, relative ones against `base`.
    pub fn resolve_from(base: &Path, root: Option<&Path>) -> Result<Self> {
        match root {
            Some(dir) if dir.is_absolute() => Self::resolve(dir),
            Some(dir) => Self::resolve(base.join(dir)),
            None => Self::resolve(base),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn resolves_conventional_layout() {
        let paths = ProjectPaths::resolve("/srv/site").unwrap();
        assert_eq!(paths.root, PathBuf::from("/srv/site"));
        assert_eq!(paths.entry, PathBuf::from("/srv/site/src/index.js"));
        assert_eq!(paths.output_dir, PathBuf::from("/srv/site/build"));
        assert_eq!(
            paths.styles,
            vec![
                PathBuf::from("/srv/site/node_modules/purecss"),
                PathBuf::from("/srv/site/src/css/main.css"),
            ]
        );
        assert_eq!(paths.env_defaults, PathBuf::from("/srv/site/.env.default"));
        assert_eq!(paths.env_overrides, PathBuf::from("/srv/site/.env"));
        assert_eq!(paths.manifest, PathBuf::from("/srv/site/package.json"));
    }

    #[test]
    fn normalizes_dot_segments() {
        let paths = ProjectPaths::resolve("/srv/site/./nested/..").unwrap();
        assert_eq!(paths.root, PathBuf::from("/srv/site"));
        assert_eq!(paths.entry, PathBuf::from("/srv/site/src/index.js"));
    }

    #[test]
    fn rejects_relative_root() {
        let err = ProjectPaths::resolve("relative/dir").unwrap_err();
        assert!(matches!(err, ConfigError::RelativeRoot(_)));
    }

    #[test]
    fn resolve_from_joins_relative_root() {
        let paths = ProjectPaths::resolve_from(Path::new("/base"), Some(Path::new("app"))).unwrap();
        assert_eq!(paths.root, PathBuf::from("/base/app"));

        let paths = ProjectPaths::resolve_from(Path::new("/base"), None).unwrap();
        assert_eq!(paths.root, PathBuf::from("/base"));
    }
}
