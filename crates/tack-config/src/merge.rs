//! Combining a base fragment with a mode overlay.

use crate::config::BuildConfig;
use crate::module::ModuleRules;
use crate::output::OutputOptions;

/// Merge `overlay` over `base`.
///
/// Single-valued sections take the overlay's value when it has one and keep
/// the base value otherwise. Lists (`module.preLoaders`, `module.loaders`,
/// `plugins`) are concatenated, base first, each keeping its own order.
///
/// # Example
///
/// ```
/// use tack_config::{BuildConfig, Devtool, merge};
///
/// let base = BuildConfig { devtool: Some(Devtool::Eval), ..BuildConfig::default() };
/// let overlay = BuildConfig { devtool: Some(Devtool::SourceMap), ..BuildConfig::default() };
///
/// assert_eq!(merge(base, overlay).devtool, Some(Devtool::SourceMap));
/// ```
pub fn merge(base: BuildConfig, overlay: BuildConfig) -> BuildConfig {
    let BuildConfig {
        entry,
        output,
        module,
        mut plugins,
        devtool,
        dev_server,
        image_optimization,
    } = base;

    plugins.extend(overlay.plugins);

    BuildConfig {
        entry: overlay.entry.or(entry),
        output: merge_output(output, overlay.output),
        module: merge_module(module, overlay.module),
        plugins,
        devtool: overlay.devtool.or(devtool),
        dev_server: overlay.dev_server.or(dev_server),
        image_optimization: overlay.image_optimization.or(image_optimization),
    }
}

fn merge_output(base: OutputOptions, overlay: OutputOptions) -> OutputOptions {
    OutputOptions {
        path: overlay.path.or(base.path),
        filename: overlay.filename.or(base.filename),
        chunk_filename: overlay.chunk_filename.or(base.chunk_filename),
    }
}

fn merge_module(mut base: ModuleRules, overlay: ModuleRules) -> ModuleRules {
    base.pre_loaders.extend(overlay.pre_loaders);
    base.loaders.extend(overlay.loaders);
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Devtool, Entry};
    use crate::module::{FilePattern, Rule, chain};
    use crate::output::FilenameTemplate;
    use crate::plugins::{
        HotModuleReplacementOptions, HtmlOptions, Plugin, PluginKind, UglifyOptions,
    };
    use std::path::PathBuf;

    fn rule(source: &str, loader: &str) -> Rule {
        Rule::new(FilePattern::new(source).unwrap(), chain([loader]))
    }

    #[test]
    fn overlay_scalars_win() {
        let base = BuildConfig {
            entry: Some(Entry::Single(PathBuf::from("/a.js"))),
            devtool: Some(Devtool::Eval),
            ..BuildConfig::default()
        };
        let overlay = BuildConfig {
            entry: Some(Entry::Single(PathBuf::from("/b.js"))),
            ..BuildConfig::default()
        };

        let merged = merge(base, overlay);
        assert_eq!(merged.entry, Some(Entry::Single(PathBuf::from("/b.js"))));
        assert_eq!(merged.devtool, Some(Devtool::Eval));
    }

    #[test]
    fn output_fields_merge_independently() {
        let base = BuildConfig {
            output: OutputOptions {
                path: Some(PathBuf::from("/out")),
                ..OutputOptions::default()
            },
            ..BuildConfig::default()
        };
        let overlay = BuildConfig {
            output: OutputOptions {
                filename: Some(FilenameTemplate::parse("bundle.js").unwrap()),
                ..OutputOptions::default()
            },
            ..BuildConfig::default()
        };

        let merged = merge(base, overlay);
        assert_eq!(merged.output.path, Some(PathBuf::from("/out")));
        assert_eq!(merged.output.filename.unwrap().as_str(), "bundle.js");
        assert!(merged.output.chunk_filename.is_none());
    }

    #[test]
    fn lists_concatenate_base_first() {
        let base = BuildConfig {
            module: ModuleRules {
                pre_loaders: vec![rule(r"\.js$", "standard")],
                loaders: vec![rule(r"\.js$", "babel"), rule(r"\.woff$", "url")],
            },
            plugins: vec![Plugin::Html(HtmlOptions::default())],
            ..BuildConfig::default()
        };
        let overlay = BuildConfig {
            module: ModuleRules {
                pre_loaders: Vec::new(),
                loaders: vec![rule(r"\.css$", "css")],
            },
            plugins: vec![
                Plugin::HotModuleReplacement(HotModuleReplacementOptions::default()),
                Plugin::Uglify(UglifyOptions::default()),
            ],
            ..BuildConfig::default()
        };

        let merged = merge(base, overlay);
        let loaders: Vec<_> = merged
            .module
            .loaders
            .iter()
            .map(|r| r.test.source().to_string())
            .collect();
        assert_eq!(loaders, vec![r"\.js$", r"\.woff$", r"\.css$"]);
        assert_eq!(merged.module.pre_loaders.len(), 1);
        assert_eq!(
            merged.plugin_kinds(),
            vec![PluginKind::Html, PluginKind::HotModuleReplacement, PluginKind::Uglify]
        );
    }

    #[test]
    fn merging_empty_overlay_is_identity() {
        let base = BuildConfig {
            devtool: Some(Devtool::SourceMap),
            plugins: vec![Plugin::Html(HtmlOptions::default())],
            ..BuildConfig::default()
        };
        assert_eq!(merge(base.clone(), BuildConfig::default()), base);
    }
}
