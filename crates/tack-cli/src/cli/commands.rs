use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::ModeArg;
use crate::cli::validation::parse_port;

/// Available tack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build, validate and print the configuration
    ///
    /// Merges the shared base with the overlay for the selected mode and
    /// prints the validated result as JSON on stdout.
    Config(ConfigArgs),

    /// Validate the configuration against the project on disk
    ///
    /// Checks that entry points, style sheets and env files exist. With
    /// --config, schema-checks an existing JSON configuration instead.
    Check(CheckArgs),

    /// Print the JSON schema of the configuration
    Schema,

    /// Print the variables resolved from .env.default and .env
    Env(EnvArgs),
}

/// Inputs that select and parameterize the build mode
///
/// Each flag overrides the matching environment variable.
#[derive(Args, Debug, Clone, Default)]
pub struct EnvFlags {
    /// Build mode (overrides NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Dev-server port (overrides PORT)
    #[arg(short, long, value_parser = parse_port)]
    pub port: Option<u16>,

    /// Dev-server bind address (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long, env = "TACK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub env: EnvFlags,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long, env = "TACK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(flatten)]
    pub env: EnvFlags,

    /// Schema-check this JSON configuration instead of building one
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the env command
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Project root (defaults to the current directory)
    #[arg(short, long, env = "TACK_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Print `process.env.KEY` replacements instead of plain variables
    #[arg(long)]
    pub define: bool,
}
