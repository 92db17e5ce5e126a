//! Mode-aware bundler configuration.
//!
//! A configuration is composed from a `common` fragment and exactly one mode
//! overlay (`development` or `production`), merged and validated before it is
//! handed to the bundler. Inputs are explicit: the build environment, the
//! project paths and the dependency manifest.
//!
//! ```
//! use tack_config::{BuildEnv, Mode, PackageManifest, ProjectPaths, build_validated};
//!
//! # #[cfg(unix)] {
//! let paths = ProjectPaths::resolve("/work/app").unwrap();
//! let config =
//!     build_validated(&BuildEnv::new(Mode::Development), &paths, &PackageManifest::default())
//!         .unwrap();
//! assert!(config.dev_server.unwrap().hot);
//! # }
//! ```

pub mod assets;
pub mod build;
pub mod config;
pub mod dev;
pub mod env;
pub mod error;
pub mod fragments;
pub mod manifest;
pub mod merge;
pub mod module;
pub mod output;
pub mod paths;
pub mod plugins;
pub mod validation;

// Re-export main types
pub use assets::{ImageOptimization, ImageminOptions, PngquantOptions, QualityRange, SvgoOptions};
pub use build::{build_config, build_for_mode, build_validated};
pub use config::{BuildConfig, Devtool, Entry, SplitEntry};
pub use dev::{DevServerOptions, StatsPreset, WatchOptions};
pub use env::{BuildEnv, Mode};
pub use error::{ConfigError, Result};
pub use manifest::PackageManifest;
pub use merge::merge;
pub use module::{Extraction, FilePattern, LoaderUse, ModuleRules, Rule, chain};
pub use output::{FilenameTemplate, OutputOptions};
pub use paths::ProjectPaths;
pub use plugins::{DotenvOptions, Plugin, PluginKind, ResolvedEnv};

// Re-export validation
pub use validation::{
    ConfigValidator, FsValidator, SchemaValidator, json_schema, parse_value, validate_fs,
    validate_schema, validate_value,
};
