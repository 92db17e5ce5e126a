//! Mode selection.

use crate::config::BuildConfig;
use crate::env::{BuildEnv, Mode};
use crate::error::Result;
use crate::fragments;
use crate::manifest::PackageManifest;
use crate::merge::merge;
use crate::paths::ProjectPaths;
use crate::validation::validate_schema;

/// Build the configuration for the mode named by `env`.
///
/// Pure apart from one log line: nothing is read from the process
/// environment or the filesystem.
///
/// # Errors
///
/// [`ConfigError::MissingMode`](crate::ConfigError::MissingMode) or
/// [`ConfigError::UnknownMode`](crate::ConfigError::UnknownMode) when the
/// discriminator is unset or unrecognized; no partial configuration is
/// produced in either case.
///
/// # Example
///
/// ```
/// use tack_config::{BuildEnv, Mode, PackageManifest, ProjectPaths, build_config};
///
/// # #[cfg(unix)] {
/// let paths = ProjectPaths::resolve("/work/app").unwrap();
/// let manifest = PackageManifest::default().with_dependency("react", "^15.0.0");
///
/// let config = build_config(&BuildEnv::new(Mode::Production), &paths, &manifest).unwrap();
/// assert_eq!(config.entry.unwrap().vendor(), ["react"]);
/// # }
/// ```
pub fn build_config(
    env: &BuildEnv,
    paths: &ProjectPaths,
    manifest: &PackageManifest,
) -> Result<BuildConfig> {
    tracing::info!(node_env = env.node_env.as_deref().unwrap_or(""), "build mode");
    let mode = env.mode()?;
    build_for_mode(mode, env, paths, manifest)
}

/// Build the configuration for an already parsed mode.
pub fn build_for_mode(
    mode: Mode,
    env: &BuildEnv,
    paths: &ProjectPaths,
    manifest: &PackageManifest,
) -> Result<BuildConfig> {
    let common = fragments::common(paths)?;
    let overlay = match mode {
        Mode::Development => fragments::development(paths, env)?,
        Mode::Production => fragments::production(paths, manifest)?,
    };

    let config = merge(common, overlay);
    tracing::debug!(
        %mode,
        plugins = config.plugins.len(),
        loaders = config.module.loaders.len(),
        "composed configuration"
    );
    Ok(config)
}

/// [`build_config`] followed by schema validation.
pub fn build_validated(
    env: &BuildEnv,
    paths: &ProjectPaths,
    manifest: &PackageManifest,
) -> Result<BuildConfig> {
    let config = build_config(env, paths, manifest)?;
    validate_schema(&config)?;
    Ok(config)
}
