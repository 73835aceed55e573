//! Constants for grade scales, display precision, and process exit codes.

/// Name of the scale used when none is configured.
pub const DEFAULT_SCALE: &str = "standard";

/// Decimal places used when displaying a result.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest precision accepted from configuration.
pub const MAX_PRECISION: usize = 6;

/// Upper bound of every built-in grade scale.
pub const MAX_POINTS: f64 = 4.0;

/// Letter grades in descending order, as presented to the user.
pub const GRADE_LABELS: [&str; 11] = [
    "A", "A-", "B+", "B", "B-", "C+", "C", "C-", "D+", "D", "F",
];

/// One-decimal scale: A- = 3.7, B+ = 3.3, and so on.
pub const STANDARD_POINTS: [f64; 11] = [4.0, 3.7, 3.3, 3.0, 2.7, 2.3, 2.0, 1.7, 1.3, 1.0, 0.0];

/// Thirds scale: A- = 3.66, B+ = 3.33, and so on.
pub const THIRDS_POINTS: [f64; 11] = [
    4.0, 3.66, 3.33, 3.0, 2.66, 2.33, 2.0, 1.66, 1.33, 1.0, 0.0,
];

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A row argument could not be parsed.
    pub const ERROR_INPUT: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
