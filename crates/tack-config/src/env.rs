//! Build mode and the environment values the configuration depends on.
//!
//! The library never reads the process environment on its own.
//! [`BuildEnv::figment`] is the one place that layers `NODE_ENV`, `PORT`
//! and `HOST` over defaults; callers extract it at the edge and pass the
//! result to [`build_config`](crate::build_config).

use std::fmt;
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_PORT: u16 = 3030;
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Environment variables consulted by [`BuildEnv::figment`].
pub const ENV_KEYS: &[&str] = &["NODE_ENV", "PORT", "HOST"];

/// Which mode-specific fragment is merged over the common one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    /// Exact match only; anything else is an error rather than an unset config.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(ConfigError::UnknownMode(other.to_string())),
        }
    }
}

/// Explicit inputs taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildEnv {
    /// Raw mode discriminator, as given. Empty counts as unset.
    #[serde(default, deserialize_with = "discriminator")]
    pub node_env: Option<String>,

    /// Dev-server port; empty falls back to the default
    #[serde(default = "default_port", deserialize_with = "port_or_default")]
    pub port: u16,

    /// Dev-server bind address; empty falls back to the default
    #[serde(default = "default_host", deserialize_with = "host_or_default")]
    pub host: String,
}

impl Default for BuildEnv {
    fn default() -> Self {
        Self {
            node_env: None,
            port: default_port(),
            host: default_host(),
        }
    }
}

impl BuildEnv {
    pub fn new(mode: Mode) -> Self {
        Self {
            node_env: Some(mode.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Parse the discriminator.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingMode`] when unset, [`ConfigError::UnknownMode`]
    /// for any value other than `development` or `production`.
    pub fn mode(&self) -> Result<Mode> {
        match self.node_env.as_deref() {
            None => Err(ConfigError::MissingMode),
            Some(raw) => raw.parse(),
        }
    }

    /// Defaults, then `NODE_ENV` / `PORT` / `HOST` from the process environment.
    ///
    /// Callers may merge further providers (CLI flags) on top before
    /// extracting.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(BuildEnv::default()))
            .merge(Env::raw().only(ENV_KEYS))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        figment
            .extract()
            .map_err(|e| ConfigError::Environment(e.to_string()))
    }

    /// Convenience for `from_figment(&BuildEnv::figment())`.
    pub fn from_process() -> Result<Self> {
        Self::from_figment(&Self::figment())
    }
}

/// An environment value as figment typed it. `NODE_ENV=1` arrives as a
/// number and `NODE_ENV=true` as a bool; both are read back as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Unsigned(n) => n.to_string(),
            Self::Signed(n) => n.to_string(),
            Self::Float(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }

    /// The text, or `None` when blank.
    fn non_empty(self) -> Option<String> {
        let text = self.into_text();
        (!text.trim().is_empty()).then_some(text)
    }
}

fn discriminator<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::non_empty))
}

fn port_or_default<'de, D>(deserializer: D) -> std::result::Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match Scalar::deserialize(deserializer)?.non_empty() {
        None => Ok(DEFAULT_PORT),
        Some(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("invalid port '{text}', expected 1-65535"))
        }),
    }
}

fn host_or_default<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Scalar::deserialize(deserializer)?
        .non_empty()
        .unwrap_or_else(default_host))
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
