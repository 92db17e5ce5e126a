//! Schema command implementation.

use crate::commands::utils;
use crate::error::Result;

/// Print the JSON schema of the configuration on stdout.
pub fn execute() -> Result<()> {
    utils::print_json(&tack_config::json_schema(), false)
}
