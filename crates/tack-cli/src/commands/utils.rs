//! Shared utilities for command implementations.
//!
//! - Build environment loading (env vars under CLI flags)
//! - Project path resolution
//! - Manifest loading
//! - JSON output

use std::path::Path;

use figment::providers::Serialized;
use serde::Serialize;
use tack_config::{BuildConfig, BuildEnv, Mode, PackageManifest, ProjectPaths, build_validated};

use crate::cli::EnvFlags;
use crate::error::Result;

/// Flag values layered over the process environment. Unset flags are
/// skipped so they never shadow `NODE_ENV`, `PORT` or `HOST`.
#[derive(Debug, Default, Serialize)]
struct EnvOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    node_env: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    host: Option<String>,
}

impl From<&EnvFlags> for EnvOverrides {
    fn from(flags: &EnvFlags) -> Self {
        Self {
            node_env: flags.mode.map(|m| m.as_str().to_string()),
            port: flags.port,
            host: flags.host.clone(),
        }
    }
}

/// Load the build environment: defaults, then the process environment,
/// then command-line flags.
///
/// # Errors
///
/// Returns `ConfigError::Environment` when a variable has the wrong type,
/// e.g. a non-numeric `PORT`.
pub fn load_build_env(flags: &EnvFlags) -> Result<BuildEnv> {
    let figment = BuildEnv::figment().merge(Serialized::defaults(EnvOverrides::from(flags)));
    let env = BuildEnv::from_figment(&figment)?;
    tracing::debug!(
        node_env = env.node_env.as_deref().unwrap_or(""),
        port = env.port,
        host = %env.host,
        "loaded build environment"
    );
    Ok(env)
}

/// Resolve the project layout from `--root`, relative to the current directory.
pub fn resolve_paths(root: Option<&Path>) -> Result<ProjectPaths> {
    let cwd = std::env::current_dir()?;
    let paths = ProjectPaths::resolve_from(&cwd, root)?;
    tracing::debug!(root = %paths.root.display(), "resolved project root");
    Ok(paths)
}

/// Load `package.json` when the mode needs it.
///
/// Only production derives anything (the vendor bundle) from the manifest,
/// so other modes, including unknown ones, get an empty manifest and fail
/// later on the mode itself.
pub fn load_manifest(env: &BuildEnv, paths: &ProjectPaths) -> Result<PackageManifest> {
    match env.mode() {
        Ok(Mode::Production) => Ok(PackageManifest::from_path(&paths.manifest)?),
        _ => Ok(PackageManifest::default()),
    }
}

/// Compose and schema-validate the configuration for `flags` under `root`.
pub fn build(root: Option<&Path>, flags: &EnvFlags) -> Result<(ProjectPaths, BuildConfig)> {
    let env = load_build_env(flags)?;
    let paths = resolve_paths(root)?;
    let manifest = load_manifest(&env, &paths)?;
    let config = build_validated(&env, &paths, &manifest)?;
    Ok((paths, config))
}

/// Print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModeArg;
    use figment::Jail;

    #[test]
    fn flags_override_environment() {
        Jail::expect_with(|jail| {
            jail.set_env("NODE_ENV", "development");
            jail.set_env("PORT", "4000");

            let flags = EnvFlags {
                mode: Some(ModeArg::Production),
                port: None,
                host: Some("127.0.0.1".to_string()),
            };
            let env = load_build_env(&flags).unwrap();
            assert_eq!(env.node_env.as_deref(), Some("production"));
            assert_eq!(env.port, 4000);
            assert_eq!(env.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn unset_flags_keep_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let env = load_build_env(&EnvFlags::default()).unwrap();
            assert_eq!(env.node_env, None);
            assert_eq!(env.port, tack_config::env::DEFAULT_PORT);
            assert_eq!(env.host, tack_config::env::DEFAULT_HOST);
            Ok(())
        });
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("PORT", "http");
            assert!(load_build_env(&EnvFlags::default()).is_err());
            Ok(())
        });
    }

    #[test]
    fn development_skips_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ProjectPaths::resolve(dir.path()).unwrap();
        let manifest = load_manifest(&BuildEnv::new(Mode::Development), &paths).unwrap();
        assert!(manifest.vendor_modules().is_empty());
        assert!(load_manifest(&BuildEnv::new(Mode::Production), &paths).is_err());
    }
}
