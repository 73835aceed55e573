//! Lenient numeric parsing for form fields.

/// Parse a credits or GPA field.
///
/// Surrounding whitespace is ignored. Empty, unparseable, and non-finite
/// text all read as `0.0`; a half-typed field must never block a
/// calculation.
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Format a credit or point total without trailing zeros.
///
/// Four decimals at most, so float noise such as `0.1 + 0.2` reads `0.3`.
#[must_use]
pub fn format_number(n: f64) -> String {
    let s = format!("{n:.4}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Whether `text` is a complete finite number, for UI hints.
#[must_use]
pub fn is_numeric(text: &str) -> bool {
    text.trim().parse::<f64>().is_ok_and(f64::is_finite)
}
