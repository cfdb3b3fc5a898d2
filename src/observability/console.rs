//! Operator console notices.

use colored::Colorize;

use crate::report::CheckResult;

/// One-line status for a check, e.g. `[NOK] db:5432 (1.2ms): connection refused`.
pub fn status_line(result: &CheckResult) -> String {
    if result.is_passed() {
        format!("[OK] {} ({})", result.resource(), result.elapsed_text())
    } else {
        format!(
            "[NOK] {} ({}): {}",
            result.resource(),
            result.elapsed_text(),
            result.error()
        )
    }
}

/// Print a failing check in red to stderr.
pub fn print_failure(result: &CheckResult) {
    eprintln!("{}", status_line(result).red().bold());
}
