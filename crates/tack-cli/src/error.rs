//! Error handling for the tack CLI.
//!
//! Library failures arrive as [`tack_config::ConfigError`] and are wrapped in
//! [`CliError`]; the few things the binary itself reads (a configuration file
//! for `check --config`, stdout for JSON) have their own variants.
//! [`ResultExt`] attaches paths and hints, and [`miette`] turns the final
//! error into a report in `main`.
//!
//! # Example
//!
//! ```rust,no_run
//! use tack_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_config(path: &Path) -> Result<serde_json::Value> {
//!     let content = std::fs::read_to_string(path).with_path(path)?;
//!     serde_json::from_str(&content).with_hint("Check JSON syntax")
//! }
//! ```

pub mod miette;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use tack_config::ConfigError;

/// Everything a tack command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Building, loading or validating the configuration failed
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A file named on the command line does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input, or output that failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other failure, with the hint attached by [`ResultExt::with_hint`]
    #[error("{message}")]
    Hinted { message: String, hint: String },
}

impl CliError {
    /// Actionable hint for the user, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config(err) => err.hint(),
            Self::FileNotFound(_) => Some("Check the path, or pass --root to point at the project"),
            Self::Hinted { hint, .. } => Some(hint),
            Self::Io(_) | Self::Json(_) => None,
        }
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Context helpers for results flowing into [`CliError`].
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;

    /// Attach a hint shown under the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| CliError::Hinted {
            message: e.into().to_string(),
            hint: hint.to_string(),
        })
    }
}
