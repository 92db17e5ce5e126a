//! Command-line interface definition for tack.
//!
//! - `tack config` - Build, validate and print the configuration
//! - `tack check` - Validate against the filesystem, or schema-check a file
//! - `tack schema` - Print the configuration's JSON schema
//! - `tack env` - Print the variables resolved from the env files

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, ConfigArgs, EnvArgs, EnvFlags};
pub use enums::*;
pub use validation::parse_port;

/// Tack - mode-aware bundler configuration
#[derive(Parser, Debug)]
#[command(
    name = "tack",
    version,
    about = "Compose and validate mode-aware bundler configuration",
    long_about = "Tack builds the bundler configuration for a project from a shared base and\n\
                  one mode overlay (development or production), validates it, and prints it\n\
                  as JSON. The mode comes from --mode or NODE_ENV."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
