//! Env command implementation.
//!
//! Resolves `.env.default` and `.env` the way the dotenv plugin does at build
//! time and prints the result.

use tack_config::DotenvOptions;

use crate::cli::EnvArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the env command.
///
/// # Errors
///
/// Fails when `.env.default` is missing or malformed, or when any declared
/// variable resolves to an empty value.
pub fn execute(args: EnvArgs) -> Result<()> {
    let paths = utils::resolve_paths(args.root.as_deref())?;
    let resolved = DotenvOptions::new(&paths.env_defaults, &paths.env_overrides)
        .resolve()?;
    tracing::debug!(count = resolved.len(), "resolved env variables");

    if args.define {
        utils::print_json(&resolved.defines(), false)
    } else {
        utils::print_json(&resolved, false)
    }
}
