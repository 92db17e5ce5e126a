//! Typed plugin directives.
//!
//! Each plugin the bundler is asked to run is one variant of [`Plugin`],
//! wrapping its own options record. The records are plain data; the only
//! behavior they carry is construction-time validation and a few queries.

mod chunks;
mod cleanup;
mod dotenv;
mod html;
mod install;
mod minify;
mod styles;

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use chunks::{CommonsChunkOptions, MinChunks};
pub use cleanup::{CleanOptions, VisualizerOptions};
pub use dotenv::{DotenvOptions, ResolvedEnv};
pub use html::HtmlOptions;
pub use install::{HotModuleReplacementOptions, NpmInstallOptions};
pub use minify::{CompressOptions, MangleOptions, UglifyOptions};
pub use styles::{ExtractTextOptions, PurifyCssOptions};

/// One entry of the `plugins` list. Order within the list is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "plugin", content = "options", rename_all = "kebab-case")]
pub enum Plugin {
    Html(HtmlOptions),
    Dotenv(DotenvOptions),
    HotModuleReplacement(HotModuleReplacementOptions),
    NpmInstall(NpmInstallOptions),
    CommonsChunk(CommonsChunkOptions),
    ExtractText(ExtractTextOptions),
    PurifyCss(PurifyCssOptions),
    Uglify(UglifyOptions),
    Visualizer(VisualizerOptions),
    Clean(CleanOptions),
}

/// Plugin identity without options, for lookups and ordering checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluginKind {
    Html,
    Dotenv,
    HotModuleReplacement,
    NpmInstall,
    CommonsChunk,
    ExtractText,
    PurifyCss,
    Uglify,
    Visualizer,
    Clean,
}

impl PluginKind {
    /// Name used in the serialized `plugin` tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Dotenv => "dotenv",
            Self::HotModuleReplacement => "hot-module-replacement",
            Self::NpmInstall => "npm-install",
            Self::CommonsChunk => "commons-chunk",
            Self::ExtractText => "extract-text",
            Self::PurifyCss => "purify-css",
            Self::Uglify => "uglify",
            Self::Visualizer => "visualizer",
            Self::Clean => "clean",
        }
    }

    /// Plugins only a production build carries.
    pub fn is_production_only(&self) -> bool {
        matches!(
            self,
            Self::CommonsChunk
                | Self::ExtractText
                | Self::PurifyCss
                | Self::Uglify
                | Self::Visualizer
                | Self::Clean
        )
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Plugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Html(_) => PluginKind::Html,
            Self::Dotenv(_) => PluginKind::Dotenv,
            Self::HotModuleReplacement(_) => PluginKind::HotModuleReplacement,
            Self::NpmInstall(_) => PluginKind::NpmInstall,
            Self::CommonsChunk(_) => PluginKind::CommonsChunk,
            Self::ExtractText(_) => PluginKind::ExtractText,
            Self::PurifyCss(_) => PluginKind::PurifyCss,
            Self::Uglify(_) => PluginKind::Uglify,
            Self::Visualizer(_) => PluginKind::Visualizer,
            Self::Clean(_) => PluginKind::Clean,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_plugin_tag() {
        let plugin = Plugin::Visualizer(VisualizerOptions::default());
        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(value["plugin"], json!("visualizer"));
        assert_eq!(value["options"]["filename"], json!("stats.html"));
    }

    #[test]
    fn kind_name_matches_serialized_tag() {
        let plugins = [
            Plugin::HotModuleReplacement(HotModuleReplacementOptions::default()),
            Plugin::ExtractText(ExtractTextOptions::default()),
            Plugin::Uglify(UglifyOptions::default()),
        ];
        for plugin in plugins {
            let value = serde_json::to_value(&plugin).unwrap();
            assert_eq!(value["plugin"], json!(plugin.name()));
        }
    }

    #[test]
    fn production_only_kinds() {
        assert!(PluginKind::Uglify.is_production_only());
        assert!(PluginKind::Clean.is_production_only());
        assert!(!PluginKind::Html.is_production_only());
        assert!(!PluginKind::HotModuleReplacement.is_production_only());
    }
}
