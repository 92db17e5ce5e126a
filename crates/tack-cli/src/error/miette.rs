//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;

use crate::error::{CliError, ConfigError};

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => config_error_to_miette(e),
        other => match other.hint() {
            Some(hint) => ::miette::miette!("{}\n\nHint: {}", other, hint),
            None => ::miette::miette!("{}", other),
        },
    }
}

/// Convert ConfigError to miette Report
pub fn config_error_to_miette(err: ConfigError) -> Report {
    match &err {
        ConfigError::MissingEnvVars(keys) => ::miette::miette!(
            "Missing environment variables:\n{}\n\nHint: {}",
            keys.iter().map(|k| format!("  - {k}")).collect::<Vec<_>>().join("\n"),
            err.hint().unwrap_or_default()
        ),
        _ => match err.hint() {
            Some(hint) => ::miette::miette!("Configuration error: {}\n\nHint: {}", err, hint),
            None => ::miette::miette!("Configuration error: {}", err),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_report_includes_hint() {
        let report = cli_error_to_miette(ConfigError::MissingMode.into());
        let msg = report.to_string();
        assert!(msg.contains("no build mode specified"));
        assert!(msg.contains("Hint: Use NODE_ENV"));
    }

    #[test]
    fn missing_env_vars_are_listed() {
        let report = config_error_to_miette(ConfigError::MissingEnvVars(vec![
            "API_URL".to_string(),
            "TOKEN".to_string(),
        ]));
        let msg = report.to_string();
        assert!(msg.contains("  - API_URL\n  - TOKEN"));
    }

    #[test]
    fn hinted_errors_show_hint() {
        let report = cli_error_to_miette(CliError::Hinted {
            message: "JSON error: trailing comma".to_string(),
            hint: "Remove the comma".to_string(),
        });
        assert_eq!(report.to_string(), "JSON error: trailing comma\n\nHint: Remove the comma");
    }

    #[test]
    fn io_errors_have_no_hint() {
        let report = cli_error_to_miette(std::io::Error::other("disk full").into());
        assert_eq!(report.to_string(), "I/O error: disk full");
    }
}
