//! Check command implementation.
//!
//! Validates a configuration without printing it.

use std::path::Path;

use tack_config::{BuildConfig, ConfigValidator, FsValidator, Plugin, parse_value, validate_schema};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// With `--config FILE`:
///
/// 1. Parse the file as JSON
/// 2. Check it against the JSON schema
/// 3. Run the semantic checks (required fields, plugin order)
///
/// Otherwise:
///
/// 1. Build the configuration for the selected mode
/// 2. Check that entry points, style sheets and include paths exist
/// 3. Resolve the env files the dotenv plugin reads
///
/// # Errors
///
/// Returns the first failing check.
pub fn execute(args: CheckArgs) -> Result<()> {
    if let Some(path) = args.config.as_deref() {
        return check_file(path);
    }

    ui::info("Checking configuration...");
    let (paths, config) = utils::build(args.root.as_deref(), &args.env)?;
    ui::success("Configuration is valid");

    ui::info("Checking project files...");
    FsValidator::new(&paths.root).validate(&config)?;
    for path in config.entry.iter().flat_map(|entry| entry.paths()) {
        ui::success(&format!("  {} exists", path.display()));
    }

    check_env_files(&config)?;

    ui::success("All checks passed!");
    Ok(())
}

/// Schema-check an existing JSON configuration.
fn check_file(path: &Path) -> Result<()> {
    ui::info(&format!("Checking {}...", path.display()));

    let content = std::fs::read_to_string(path).with_path(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_hint("The configuration file must be a single JSON object")?;

    let config = parse_value(value)?;
    validate_schema(&config)?;

    ui::success(&format!("{} is valid", path.display()));
    Ok(())
}

/// Every variable the dotenv plugin substitutes must resolve to a value.
fn check_env_files(config: &BuildConfig) -> Result<()> {
    let dotenv = config.plugins.iter().find_map(|plugin| match plugin {
        Plugin::Dotenv(options) => Some(options),
        _ => None,
    });

    let Some(options) = dotenv else {
        ui::warning("No dotenv plugin configured, skipping env files");
        return Ok(());
    };

    ui::info("Checking env files...");
    let resolved = options.resolve()?;
    ui::success(&format!("  {} variables resolved", resolved.len()));
    Ok(())
}
