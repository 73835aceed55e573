//! CLI output formatting.

use std::io::{self, Write};

pub use gradecalc_core::numeric::format_number;

/// Shown in place of a number when there is no weight.
pub const NO_RESULT: &str = "no result (no credits)";

/// Format an average with `precision` decimals, or [`NO_RESULT`].
#[must_use]
pub fn format_average(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| NO_RESULT.to_string(), |v| format!("{v:.precision$}"))
}

/// Write result lines to a file, one per line.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, lines: &[String]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    for line in lines {
        writeln!(file, "{line}")?;
    }
    Ok(())
}
