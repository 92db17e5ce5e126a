//! Partial configurations: the part every build shares and one overlay per
//! mode.
//!
//! Fragments are pure functions of their inputs. They are combined with
//! [`merge`](crate::merge::merge); see [`build_config`](crate::build_config).

use crate::assets::ImageOptimization;
use crate::config::{BuildConfig, Devtool, Entry, SplitEntry};
use crate::dev::{DevServerOptions, StatsPreset, WatchOptions};
use crate::env::BuildEnv;
use crate::error::Result;
use crate::manifest::PackageManifest;
use crate::module::{FilePattern, LoaderUse, ModuleRules, Rule, chain};
use crate::output::{FilenameTemplate, OutputOptions};
use crate::paths::ProjectPaths;
use crate::plugins::{
    CleanOptions, CommonsChunkOptions, DotenvOptions, ExtractTextOptions, HtmlOptions,
    HotModuleReplacementOptions, NpmInstallOptions, Plugin, PurifyCssOptions, UglifyOptions,
    VisualizerOptions,
};

const SCRIPTS: &str = r"\.jsx?$";
const FONTS: &str = r"\.woff(2)?(\?v=[0-9]\.[0-9]\.[0-9])?$";
const CSS: &str = r"\.css$";
const LESS: &str = r"\.less$";
const SASS: &str = r"\.sass$";
const IMAGES: &str = r"\.(jpe?g|png|gif|svg)$";

/// Inline fonts below this size (bytes) as data URLs.
const FONT_INLINE_LIMIT: u64 = 50_000;

/// Hashes images by content and hands them to the optimizer.
const HASHED_IMAGE_LOADER: &str = "file?hash=sha512&digest=hex&name=[hash].[ext]";

/// Shared by every mode: output directory, page generation, env injection,
/// linting, transpiling and fonts.
pub fn common(paths: &ProjectPaths) -> Result<BuildConfig> {
    let babel = LoaderUse::new("babel").with_option("cacheDirectory", true);
    let fonts = LoaderUse::new("url")
        .with_option("limit", FONT_INLINE_LIMIT)
        .with_option("mimetype", "application/font-woff")
        .with_option("name", "./fonts/[hash].[ext]");

    Ok(BuildConfig {
        output: OutputOptions {
            path: Some(paths.output_dir.clone()),
            ..OutputOptions::default()
        },
        module: ModuleRules {
            pre_loaders: vec![
                Rule::new(FilePattern::new(SCRIPTS)?, chain(["standard"])).include(&paths.entry),
            ],
            loaders: vec![
                Rule::new(FilePattern::new(SCRIPTS)?, vec![babel]).include(&paths.entry),
                Rule::new(FilePattern::new(FONTS)?, vec![fonts]),
            ],
        },
        plugins: vec![
            Plugin::Html(HtmlOptions::default()),
            Plugin::Dotenv(DotenvOptions::new(&paths.env_defaults, &paths.env_overrides)),
        ],
        ..BuildConfig::default()
    })
}

/// Single unhashed bundle served from memory with hot reload.
pub fn development(paths: &ProjectPaths, env: &BuildEnv) -> Result<BuildConfig> {
    let dev_server = DevServerOptions {
        inline: true,
        hot: true,
        port: env.port,
        host: env.host.clone(),
        stats: StatsPreset::ErrorsOnly,
        history_api_fallback: true,
        content_base: Some(paths.output_dir.clone()),
        watch_options: WatchOptions::polling(300, 1000),
        compress: true,
    };

    Ok(BuildConfig {
        entry: Some(Entry::Single(paths.entry.clone())),
        output: OutputOptions {
            filename: Some(FilenameTemplate::known("bundle.js")),
            ..OutputOptions::default()
        },
        module: ModuleRules {
            pre_loaders: Vec::new(),
            loaders: vec![
                Rule::new(FilePattern::new(CSS)?, chain(["style", "css"])),
                Rule::new(FilePattern::new(LESS)?, chain(["style", "css", "less"])),
                Rule::new(FilePattern::new(SASS)?, chain(["style", "css", "sass"])),
                Rule::new(FilePattern::case_insensitive(IMAGES)?, chain(["file"])),
            ],
        },
        plugins: vec![
            Plugin::HotModuleReplacement(HotModuleReplacementOptions { multi_step: true }),
            Plugin::NpmInstall(NpmInstallOptions::tooling()?),
        ],
        devtool: Some(Devtool::EvalSourceMap),
        dev_server: Some(dev_server),
        ..BuildConfig::default()
    })
}

/// Split, content-hashed, minified output with extracted styles and
/// optimized images.
///
/// The vendor chunk is every runtime dependency of `manifest`, in manifest
/// order. Nothing else in the fragment depends on the manifest.
pub fn production(paths: &ProjectPaths, manifest: &PackageManifest) -> Result<BuildConfig> {
    let style = || LoaderUse::new("style");
    let images = vec![
        LoaderUse::parse(HASHED_IMAGE_LOADER)?,
        LoaderUse::new("image-webpack"),
    ];

    Ok(BuildConfig {
        entry: Some(Entry::Split(SplitEntry {
            app: paths.entry.clone(),
            vendor: manifest.vendor_modules(),
            style: paths.styles.clone(),
        })),
        output: OutputOptions {
            path: None,
            filename: Some(FilenameTemplate::known("[name].[chunkhash].js")),
            chunk_filename: Some(FilenameTemplate::known("[chunkhash].js")),
        },
        module: ModuleRules {
            pre_loaders: Vec::new(),
            loaders: vec![
                Rule::extracted(FilePattern::new(CSS)?, style(), chain(["css"])),
                Rule::extracted(FilePattern::new(LESS)?, style(), chain(["css", "less"])),
                Rule::extracted(FilePattern::new(SASS)?, style(), chain(["css", "sass"])),
                Rule::new(FilePattern::case_insensitive(IMAGES)?, images),
            ],
        },
        plugins: vec![
            Plugin::CommonsChunk(CommonsChunkOptions::default()),
            Plugin::ExtractText(ExtractTextOptions::default()),
            Plugin::PurifyCss(PurifyCssOptions::new(&paths.root, vec![paths.entry.clone()])),
            Plugin::Uglify(UglifyOptions::default()),
            Plugin::Visualizer(VisualizerOptions::default()),
            Plugin::Clean(CleanOptions::new(vec![paths.output_dir.clone()], &paths.root)?),
        ],
        devtool: Some(Devtool::SourceMap),
        image_optimization: Some(ImageOptimization::default()),
        ..BuildConfig::default()
    })
}
