//! Development server configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::env::{DEFAULT_HOST, DEFAULT_PORT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevServerOptions {
    /// Inject the live-reload client into the bundle
    #[serde(default = "default_true")]
    pub inline: bool,

    /// Hot module replacement
    #[serde(default)]
    pub hot: bool,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default)]
    pub stats: StatsPreset,

    /// Serve `index.html` for unknown routes (client-side routing)
    #[serde(default)]
    pub history_api_fallback: bool,

    /// Directory served alongside the in-memory bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_base: Option<PathBuf>,

    #[serde(default)]
    pub watch_options: WatchOptions,

    /// Gzip responses
    #[serde(default)]
    pub compress: bool,
}

impl Default for DevServerOptions {
    fn default() -> Self {
        Self {
            inline: true,
            hot: false,
            port: default_port(),
            host: default_host(),
            stats: StatsPreset::default(),
            history_api_fallback: false,
            content_base: None,
            watch_options: WatchOptions::default(),
            compress: false,
        }
    }
}

/// File watching behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WatchOptions {
    /// Delay before rebuilding once a change is seen, aggregating later changes (ms)
    #[serde(default = "default_aggregate_timeout")]
    pub aggregate_timeout: u64,

    /// Poll interval in ms; `None` uses native filesystem events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<u64>,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            aggregate_timeout: default_aggregate_timeout(),
            poll: None,
        }
    }
}

impl WatchOptions {
    pub fn polling(aggregate_timeout: u64, poll: u64) -> Self {
        Self {
            aggregate_timeout,
            poll: Some(poll),
        }
    }
}

/// How much build output the server prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPreset {
    None,
    ErrorsOnly,
    Minimal,
    #[default]
    Normal,
    Verbose,
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_aggregate_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_camel_case_keys() {
        let options = DevServerOptions {
            hot: true,
            history_api_fallback: true,
            stats: StatsPreset::ErrorsOnly,
            watch_options: WatchOptions::polling(300, 1000),
            ..DevServerOptions::default()
        };

        let value = serde_json::to_value(&options).unwrap();
        assert_eq!(value["historyApiFallback"], json!(true));
        assert_eq!(value["stats"], json!("errors-only"));
        assert_eq!(value["watchOptions"]["aggregateTimeout"], json!(300));
        assert_eq!(value["watchOptions"]["poll"], json!(1000));
        assert!(value.get("contentBase").is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: DevServerOptions = serde_json::from_value(json!({ "hot": true })).unwrap();
        assert!(options.inline);
        assert_eq!(options.port, 3030);
        assert_eq!(options.host, "0.0.0.0");
        assert_eq!(options.watch_options.poll, None);
    }

    #[test]
    fn rejects_unknown_keys() {
        let result: Result<DevServerOptions, _> = serde_json::from_value(json!({ "hotOnly": true }));
        assert!(result.is_err());
    }
}
