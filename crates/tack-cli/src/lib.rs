//! Tack CLI - compose and validate mode-aware bundler configuration.
//!
//! The binary reads the process environment (`NODE_ENV`, `PORT`, `HOST`)
//! and command-line flags, hands them to `tack-config` as explicit inputs,
//! and prints the validated configuration as JSON.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - Colored status messages on stderr
//!
//! # Example
//!
//! ```rust
//! use tack_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, true, true);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
