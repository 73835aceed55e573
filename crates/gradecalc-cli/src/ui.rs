//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A section header, e.g. `=== GPA ===`.
#[must_use]
pub fn header(text: &str, color: bool) -> String {
    let plain = format!("=== {text} ===");
    if color {
        style(plain).bold().cyan().to_string()
    } else {
        plain
    }
}

/// `label: value`, with the value green when it is a number and dimmed when
/// there is no result.
#[must_use]
pub fn result_line(label: &str, value: &str, computable: bool, color: bool) -> String {
    if !color {
        return format!("{label}: {value}");
    }
    let value = if computable {
        style(value).green().bold()
    } else {
        style(value).dim()
    };
    format!("{}: {value}", style(label).bold())
}

/// An error line, prefixed with `[ERROR]`.
#[must_use]
pub fn error_line(text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", style("[ERROR]").red().bold())
    } else {
        format!("[ERROR] {text}")
    }
}

/// Print a styled header.
pub fn print_header(text: &str) {
    println!("{}", header(text, !is_color_disabled()));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text, !is_color_disabled()));
}
