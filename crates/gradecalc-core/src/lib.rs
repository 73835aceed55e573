//! # gradecalc-core
//!
//! Core library for GradeCalc: editable entry lists, grade-to-points scales,
//! and the weighted-average engine behind GPA and CGPA.

pub mod calculator;
pub mod constants;
pub mod engine;
pub mod entry;
pub mod grade;
pub mod mode;
pub mod numeric;
pub mod scale;
pub mod store;

// Re-exports
pub use calculator::{CalculationResult, Calculator, ResultPresenter};
pub use constants::{exit_codes, DEFAULT_PRECISION, DEFAULT_SCALE, MAX_PRECISION};
pub use engine::{accumulate, weighted_average, Totals};
pub use entry::{CourseEntry, Entry, Field, SemesterEntry};
pub use grade::{Grade, GradeError};
pub use mode::Mode;
pub use scale::{GradeScale, PointsResolver};
pub use store::{EntryList, StoreError};

/// GPA of `(grade, credits)` pairs on the standard scale.
///
/// A convenience wrapper for simple use; build an [`EntryList`] and a
/// [`Calculator`] to pick a scale or edit rows.
///
/// # Example
/// ```
/// let gpa = gradecalc_core::gpa(&[("A", "3"), ("B", "2")]).unwrap();
/// assert!((gpa - 3.6).abs() < 1e-9);
/// assert_eq!(gradecalc_core::gpa(&[]), None);
/// ```
#[must_use]
pub fn gpa(courses: &[(&str, &str)]) -> Option<f64> {
    let entries: Vec<Entry> = courses
        .iter()
        .map(|(grade, credits)| {
            Entry::Course(CourseEntry {
                name: String::new(),
                grade: Grade::parse_lenient(grade),
                credits: (*credits).to_string(),
            })
        })
        .collect();
    weighted_average(&entries, &GradeScale::standard())
}
