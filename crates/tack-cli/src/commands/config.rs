//! Config command implementation.

use crate::cli::ConfigArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the config command.
///
/// Builds the configuration for the selected mode, validates it against the
/// schema and prints it as JSON on stdout.
///
/// # Errors
///
/// Returns errors for an unknown or missing mode, an unreadable manifest, or
/// a configuration that fails validation.
pub fn execute(args: ConfigArgs) -> Result<()> {
    let (_, config) = utils::build(args.root.as_deref(), &args.env)?;
    utils::print_json(&config, args.compact)?;

    ui::success(&format!(
        "Configuration valid ({} plugins, {} loaders)",
        config.plugins.len(),
        config.module.loaders.len()
    ));
    Ok(())
}
