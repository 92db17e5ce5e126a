//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::{BuildConfig, Entry};
use crate::error::{ConfigError, Result};
use crate::plugins::PluginKind;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a merged configuration
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// Structural rules first, then the serialized configuration is checked
/// against the JSON schema generated from [`BuildConfig`].
///
/// # Example
///
/// ```
/// use tack_config::{BuildConfig, ConfigError, ConfigValidator, SchemaValidator};
///
/// let err = SchemaValidator.validate(&BuildConfig::default()).unwrap_err();
/// assert!(matches!(err, ConfigError::MissingField("entry")));
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // Required sections
        if config.entry.is_none() {
            return Err(ConfigError::MissingField("entry"));
        }
        match &config.output.path {
            None => return Err(ConfigError::MissingField("output.path")),
            Some(path) if !path.is_absolute() => {
                return Err(ConfigError::schema(
                    format!("output.path must be absolute: {}", path.display()),
                    "Resolve the output directory against the project root",
                ));
            }
            Some(_) => {}
        }
        if config.output.filename.is_none() {
            return Err(ConfigError::MissingField("output.filename"));
        }

        // Every rule must name its loaders
        for rule in config.module.iter() {
            let chain = rule.declared_chain();
            if chain.is_empty() {
                return Err(ConfigError::schema(
                    format!("rule {} has no loaders", rule.test),
                    "Give the rule at least one loader",
                ));
            }
            let fallback = rule.extract.iter().map(|e| &e.fallback);
            if chain.iter().chain(fallback).any(|l| l.loader.trim().is_empty()) {
                return Err(ConfigError::schema(
                    format!("rule {} has an empty loader name", rule.test),
                    "Remove empty entries from the loader chain",
                ));
            }
        }

        // Plugins the rules and dev server rely on
        if config.module.iter().any(|r| r.is_extracted())
            && !config.has_plugin(PluginKind::ExtractText)
        {
            return Err(ConfigError::schema(
                "style rules are extracted but the extract-text plugin is missing",
                "Add the extract-text plugin or inline the style chains",
            ));
        }

        if let Some(server) = &config.dev_server {
            if server.hot && !config.has_plugin(PluginKind::HotModuleReplacement) {
                return Err(ConfigError::schema(
                    "devServer.hot is set but the hot-module-replacement plugin is missing",
                    "Add the hot-module-replacement plugin or disable hot",
                ));
            }
            if server.port == 0 {
                return Err(ConfigError::schema(
                    "devServer.port cannot be 0",
                    "Set PORT to a free port, e.g. 3030",
                ));
            }
            // Modes never mix
            if let Some(kind) = config.plugin_kinds().into_iter().find(|k| k.is_production_only()) {
                return Err(ConfigError::schema(
                    format!("devServer is set alongside the production-only {kind} plugin"),
                    "Build with a single mode: development or production",
                ));
            }
        }

        // Chunk splitting must see unminified modules
        if let (Some(chunks), Some(minify)) = (
            config.plugin_position(PluginKind::CommonsChunk),
            config.plugin_position(PluginKind::Uglify),
        ) {
            if chunks > minify {
                return Err(ConfigError::schema(
                    "commons-chunk runs after uglify",
                    "Place the commons-chunk plugin before the uglify plugin",
                ));
            }
        }

        let value = serde_json::to_value(config).map_err(|e| {
            ConfigError::schema(e.to_string(), "The configuration could not be serialized")
        })?;
        validate_value(&value)
    }
}

/// Filesystem validator (for CLI use)
///
/// Runs [`SchemaValidator`], then checks that entry paths, style paths and
/// rule include paths exist on disk. Relative paths are resolved against
/// the validator's root.
///
/// # Example
///
/// ```no_run
/// use tack_config::{BuildEnv, ConfigValidator, FsValidator, Mode, PackageManifest, ProjectPaths};
///
/// let paths = ProjectPaths::from_current_dir().unwrap();
/// let manifest = PackageManifest::from_path(&paths.manifest).unwrap();
/// let config = tack_config::build_config(&BuildEnv::new(Mode::Production), &paths, &manifest).unwrap();
///
/// FsValidator::new(&paths.root).validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    /// Create a new filesystem validator with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        // First run schema validation
        SchemaValidator.validate(config)?;

        // Then validate filesystem references
        for path in config.entry.iter().flat_map(Entry::paths) {
            let path = self.root.join(path);
            if !path.exists() {
                return Err(ConfigError::EntryNotFound(path));
            }
        }

        for include in config.module.iter().filter_map(|r| r.include.as_ref()) {
            let path = self.root.join(include);
            if !path.exists() {
                return Err(ConfigError::IncludeNotFound(path));
            }
        }

        Ok(())
    }
}

/// The JSON schema of [`BuildConfig`].
pub fn json_schema() -> Value {
    schemars::schema_for!(BuildConfig).to_value()
}

/// Check an arbitrary JSON document against [`json_schema`].
///
/// All violations are reported together.
pub fn validate_value(value: &Value) -> Result<()> {
    let schema = json_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| {
        ConfigError::schema(format!("invalid schema: {e}"), "This is a bug in tack-config")
    })?;

    let errors: Vec<String> = validator.iter_errors(value).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        return Ok(());
    }

    tracing::debug!(violations = errors.len(), "schema validation failed");
    Err(ConfigError::schema(
        errors.join("; "),
        "Compare the configuration with `tack schema`",
    ))
}

/// Schema-check a JSON document and deserialize it into a [`BuildConfig`].
///
/// Deserialization runs the construction-time checks of every typed option
/// block (patterns, templates, ranges).
pub fn parse_value(value: Value) -> Result<BuildConfig> {
    validate_value(&value)?;
    serde_json::from_value(value).map_err(|e| ConfigError::SchemaValidation {
        message: e.to_string(),
        hint: None,
    })
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::dev::DevServerOptions;
    use crate::env::{BuildEnv, Mode};
    use crate::manifest::PackageManifest;
    use crate::paths::ProjectPaths;
    use crate::{build_for_mode, merge};
    use serde_json::json;

    fn built(mode: Mode) -> BuildConfig {
        let paths = ProjectPaths::resolve("/app").unwrap();
        build_for_mode(mode, &BuildEnv::new(mode), &paths, &PackageManifest::default()).unwrap()
    }

    #[test]
    fn schema_validator_accepts_built_configs() {
        assert!(validate_schema(&built(Mode::Development)).is_ok());
        assert!(validate_schema(&built(Mode::Production)).is_ok());
    }

    #[test]
    fn schema_validator_rejects_missing_entry() {
        let mut config = built(Mode::Development);
        config.entry = None;
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::MissingField("entry"))
        ));
    }

    #[test]
    fn schema_validator_rejects_relative_output() {
        let mut config = built(Mode::Development);
        config.output.path = Some(PathBuf::from("build"));
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::SchemaValidation { .. })
        ));
    }

    #[test]
    fn extract_rules_need_the_plugin() {
        let mut config = built(Mode::Production);
        config.plugins.retain(|p| p.kind() != PluginKind::ExtractText);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("extract-text"));
    }

    #[test]
    fn hot_reload_needs_the_plugin() {
        let mut config = built(Mode::Development);
        config.plugins.retain(|p| p.kind() != PluginKind::HotModuleReplacement);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("hot-module-replacement"));
    }

    #[test]
    fn zero_port_is_rejected() {
        let mut config = built(Mode::Development);
        config.dev_server = Some(DevServerOptions {
            port: 0,
            hot: false,
            ..DevServerOptions::default()
        });
        assert!(validate_schema(&config).is_err());
    }

    #[test]
    fn commons_chunk_must_precede_uglify() {
        let mut config = built(Mode::Production);
        let chunks = config.plugin_position(PluginKind::CommonsChunk).unwrap();
        let plugin = config.plugins.remove(chunks);
        config.plugins.push(plugin);
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("commons-chunk"));
    }

    #[test]
    fn value_check_reports_unknown_keys() {
        let mut value = built(Mode::Development).to_json().unwrap();
        value["resolve"] = json!({ "extensions": [".js"] });
        let err = validate_value(&value).unwrap_err();
        assert!(matches!(err, ConfigError::SchemaValidation { .. }));
    }

    #[test]
    fn value_check_rejects_unknown_plugin() {
        let mut value = built(Mode::Development).to_json().unwrap();
        value["plugins"]
            .as_array_mut()
            .unwrap()
            .push(json!({ "plugin": "offline", "options": {} }));
        assert!(validate_value(&value).is_err());
    }

    #[test]
    fn parse_value_round_trips_built_config() {
        let config = built(Mode::Production);
        let parsed = parse_value(config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn fs_validator_reports_missing_entry() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = ProjectPaths::resolve(dir.path()).unwrap();
        let config = build_for_mode(
            Mode::Development,
            &BuildEnv::new(Mode::Development),
            &paths,
            &PackageManifest::default(),
        )
        .unwrap();

        let err = validate_fs(&config, &paths.root).unwrap_err();
        assert!(matches!(err, ConfigError::EntryNotFound(p) if p == paths.entry));

        std::fs::create_dir_all(paths.entry.parent().unwrap()).unwrap();
        std::fs::write(&paths.entry, "").unwrap();
        assert!(validate_fs(&config, &paths.root).is_ok());
    }

    #[test]
    fn merged_fragments_without_mode_overlay_fail() {
        let paths = ProjectPaths::resolve("/app").unwrap();
        let common = crate::fragments::common(&paths).unwrap();
        let config = merge(common, BuildConfig::default());
        assert!(matches!(
            validate_schema(&config),
            Err(ConfigError::MissingField("entry"))
        ));
    }

    #[test]
    fn development_overlaid_with_production_is_rejected() {
        let config = merge(built(Mode::Development), built(Mode::Production));
        let err = validate_schema(&config).unwrap_err();
        assert!(err.to_string().contains("production-only"), "{err}");
    }
}
