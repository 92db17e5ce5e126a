//! Terminal output for status messages.
//!
//! Status lines go to stderr; command results (JSON) go to stdout. Colors
//! follow `--no-color`, `NO_COLOR`/`FORCE_COLOR` and terminal detection, and
//! `--quiet` silences status lines entirely. Errors are not status lines:
//! they are reported once by `main` through miette.
//!
//! ```no_run
//! use tack_cli::ui;
//!
//! ui::init(false, false);
//! ui::success("Configuration is valid");
//! ```

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};

pub use messages::{info, success, warning};

static COLORS: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Decide once whether status messages are colored or shown at all.
pub fn init(no_color: bool, quiet: bool) {
    COLORS.store(!no_color && crate::logger::should_use_colors(), Ordering::Relaxed);
    QUIET.store(quiet, Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

pub(crate) fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}
