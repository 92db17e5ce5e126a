//! Tack CLI - compose and validate mode-aware bundler configuration.
//!
//! Handles argument parsing, logging initialization and command dispatch.

use clap::Parser;
use miette::Result;
use tack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init(args.no_color, args.quiet);

    let result = match args.command {
        cli::Command::Config(config_args) => commands::config_execute(config_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
        cli::Command::Schema => commands::schema_execute(),
        cli::Command::Env(env_args) => commands::env_execute(env_args),
    };

    result.map_err(error::miette::cli_error_to_miette)
}
