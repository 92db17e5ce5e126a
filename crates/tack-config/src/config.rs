//! The configuration object handed to the bundler.

use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::assets::ImageOptimization;
use crate::dev::DevServerOptions;
use crate::module::ModuleRules;
use crate::output::OutputOptions;
use crate::plugins::{Plugin, PluginKind};

/// A complete bundler configuration, or one fragment of it.
///
/// Every section is optional or empty by default so that fragments only
/// carry what they contribute; [`merge`](crate::merge) combines them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<Entry>,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub module: ModuleRules,

    #[serde(default)]
    pub plugins: Vec<Plugin>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub devtool: Option<Devtool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,

    #[serde(
        default,
        rename = "imageWebpackLoader",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_optimization: Option<ImageOptimization>,
}

impl BuildConfig {
    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugin_position(kind).is_some()
    }

    /// Index of the first plugin of `kind` in the plugin list.
    pub fn plugin_position(&self, kind: PluginKind) -> Option<usize> {
        self.plugins.iter().position(|p| p.kind() == kind)
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(Plugin::kind).collect()
    }

    /// Serialize as the bundler consumes it.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Where bundling starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Entry {
    /// One source file, one bundle
    Single(PathBuf),
    /// Named chunks
    Split(SplitEntry),
}

impl Entry {
    /// Every filesystem path the entry names. Vendor modules are package
    /// names resolved by the bundler, so they are not included.
    pub fn paths(&self) -> Vec<&Path> {
        match self {
            Self::Single(path) => vec![path.as_path()],
            Self::Split(split) => std::iter::once(split.app.as_path())
                .chain(split.style.iter().map(PathBuf::as_path))
                .collect(),
        }
    }

    pub fn vendor(&self) -> &[String] {
        match self {
            Self::Single(_) => &[],
            Self::Split(split) => &split.vendor,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SplitEntry {
    /// Application code
    pub app: PathBuf,
    /// Third-party modules, hashed separately so they cache across releases
    #[serde(default)]
    pub vendor: Vec<String>,
    /// Style sheets bundled into their own chunk
    #[serde(default)]
    pub style: Vec<PathBuf>,
}

/// Source map flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Devtool {
    Eval,
    EvalSourceMap,
    CheapModuleEvalSourceMap,
    CheapModuleSourceMap,
    SourceMap,
    HiddenSourceMap,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::{UglifyOptions, VisualizerOptions};
    use serde_json::json;

    #[test]
    fn empty_fragment_serializes_sparse() {
        let value = BuildConfig::default().to_json().unwrap();
        assert_eq!(
            value,
            json!({
                "output": {},
                "module": { "preLoaders": [], "loaders": [] },
                "plugins": []
            })
        );
    }

    #[test]
    fn entry_shapes() {
        let single = Entry::Single(PathBuf::from("/app/src/index.js"));
        assert_eq!(serde_json::to_value(&single).unwrap(), json!("/app/src/index.js"));
        assert!(single.vendor().is_empty());

        let split = Entry::Split(SplitEntry {
            app: PathBuf::from("/app/src/index.js"),
            vendor: vec!["react".to_string()],
            style: vec![PathBuf::from("/app/src/css/main.css")],
        });
        let value = serde_json::to_value(&split).unwrap();
        assert_eq!(value["vendor"], json!(["react"]));
        assert_eq!(split.paths().len(), 2);

        let parsed: Entry = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, split);
    }

    #[test]
    fn plugin_lookup() {
        let config = BuildConfig {
            plugins: vec![
                Plugin::Uglify(UglifyOptions::default()),
                Plugin::Visualizer(VisualizerOptions::default()),
            ],
            ..BuildConfig::default()
        };
        assert_eq!(config.plugin_position(PluginKind::Visualizer), Some(1));
        assert!(!config.has_plugin(PluginKind::Clean));
        assert_eq!(config.plugin_kinds(), vec![PluginKind::Uglify, PluginKind::Visualizer]);
    }

    #[test]
    fn devtool_uses_bundler_names() {
        assert_eq!(serde_json::to_value(Devtool::EvalSourceMap).unwrap(), json!("eval-source-map"));
        assert_eq!(serde_json::to_value(Devtool::SourceMap).unwrap(), json!("source-map"));
    }
}
