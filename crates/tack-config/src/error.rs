//! Error types for configuration building, validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Mode selection errors
    #[error("unknown build mode '{0}' (expected 'development' or 'production')")]
    UnknownMode(String),

    #[error("no build mode specified (set NODE_ENV to 'development' or 'production')")]
    MissingMode,

    // Path resolution errors
    #[error("project root must be an absolute path: {}", .0.display())]
    RelativeRoot(PathBuf),

    // Manifest errors
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {message}", .path.display())]
    ManifestParse { path: PathBuf, message: String },

    #[error("manifest {} exceeds maximum size of {limit} bytes", .path.display())]
    ManifestTooLarge { path: PathBuf, limit: u64 },

    // Option construction errors
    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("invalid filename template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },

    // Schema validation errors (no filesystem checks)
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .0.display())]
    EntryNotFound(PathBuf),

    #[error("include path not found: {}", .0.display())]
    IncludeNotFound(PathBuf),

    // Dotenv errors
    #[error("failed to load env file {}: {message}", .path.display())]
    EnvFile { path: PathBuf, message: String },

    #[error("missing environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    #[error("failed to load build environment: {0}")]
    Environment(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn schema(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::SchemaValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Actionable hint for the user, when one exists.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SchemaValidation { hint, .. } => hint.as_deref(),
            Self::UnknownMode(_) | Self::MissingMode => {
                Some("Use NODE_ENV=development or NODE_ENV=production")
            }
            Self::MissingEnvVars(_) => Some("Define the variables in .env or give them defaults"),
            _ => None,
        }
    }
}
