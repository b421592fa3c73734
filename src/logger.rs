// Logging for the agent.
// Level-tagged, coloured lines on stderr. The resolution/validation/mutation
// engine only ever logs at DEBUG, so a caller that never enables debug mode
// sees nothing from the core; the command layer reports outcomes at INFO/WARN/ERROR.

use colored::*; // Used for adding color to log messages.
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

// `log_info!` for operator-facing progress messages.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => (eprintln!("{} {}", "[INFO]".bright_green(), format!($($arg)*)));
}

// `log_warn!` for conditions the operator should look at, but which do not stop the command.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => (eprintln!("{} {}", "[WARN]".bright_yellow(), format!($($arg)*)));
}

// `log_error!` for failed commands.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => (eprintln!("{} {}", "[ERROR]".bright_red(), format!($($arg)*)));
}

// `log_debug!` traces the engine: which table entry matched, which rule fired,
// which directory was picked. Printed only after `init(true)`.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_debug_enabled() {
           eprintln!("{} {}", "[DEBUG]".dimmed(), format!($($arg)*));
        }
    };
}

static DEBUG_ENABLED: OnceLock<AtomicBool> = OnceLock::new();

/// Sets the process-wide debug flag. Call once at startup; later calls just
/// overwrite the flag.
///
/// # Arguments
/// * `debug`: If `true`, DEBUG lines are printed in addition to INFO/WARN/ERROR.
pub fn init(debug: bool) {
    DEBUG_ENABLED
        .get_or_init(|| AtomicBool::new(debug))
        .store(debug, Ordering::Relaxed);

    log_debug!("[Agent] Logger initialized in DEBUG mode");
}

/// Whether DEBUG lines are printed. `false` until `init` has been called,
/// which keeps library consumers quiet by default.
pub fn is_debug_enabled() -> bool {
    DEBUG_ENABLED
        .get()
        .map(|f| f.load(Ordering::Relaxed))
        .unwrap_or(false)
}
