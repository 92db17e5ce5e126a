//! Status lines: one symbol, one message, on stderr.

use owo_colors::{AnsiColors, OwoColorize};

fn status(symbol: &str, color: AnsiColors, message: &str) {
    if super::is_quiet() {
        return;
    }
    if super::colors_enabled() {
        eprintln!("{} {}", symbol.color(color).bold(), message);
    } else {
        eprintln!("{symbol} {message}");
    }
}

/// Print a success message.
///
/// ```no_run
/// use tack_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    status("✓", AnsiColors::Green, message);
}

pub fn info(message: &str) {
    status("ℹ", AnsiColors::Blue, message);
}

/// Print a warning. Unlike errors, warnings never stop a command.
pub fn warning(message: &str) {
    status("⚠", AnsiColors::Yellow, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_do_not_panic() {
        success("Configuration is valid");
        info("Checking env files...");
        warning("No dotenv plugin configured");
    }
}
