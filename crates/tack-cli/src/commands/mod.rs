//! Command implementations for the tack CLI.
//!
//! - [`config`] - Build, validate and print the configuration
//! - [`check`] - Filesystem and schema validation
//! - [`schema`] - JSON schema export
//! - [`env`] - Dotenv resolution
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod check;
pub mod config;
pub mod env;
pub mod schema;
pub(crate) mod utils;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use config::execute as config_execute;
pub use env::execute as env_execute;
pub use schema::execute as schema_execute;
