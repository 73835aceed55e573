//! Version information.

use gradecalc_core::scale::GradeScale;

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version plus the built-in grade scales, logged at startup.
#[must_use]
pub fn full_version() -> String {
    format!(
        "gradecalc {} (scales: {})",
        version(),
        GradeScale::available().join(", ")
    )
}
