//! Parsing of `--course` and `--semester` row arguments.
//!
//! Courses are written `NAME:GRADE:CREDITS` or `GRADE:CREDITS`; semesters are
//! `GPA:CREDITS`. Only the shape is checked here. Field contents follow the
//! same lenient rules as the interactive form: an unknown grade is unset and
//! a non-numeric credits value counts as zero.
//!
//! Grade lookup in the core is exact (`"a"` is not `"A"`). Command-line
//! grades are trimmed and upper-cased first, so `b+` on a shell prompt means
//! `B+`.

use tracing::warn;

use gradecalc_core::entry::{CourseEntry, Entry, SemesterEntry};
use gradecalc_core::grade::Grade;
use gradecalc_core::numeric::is_numeric;

/// Error type for row arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The value does not have the expected `:`-separated shape.
    #[error("malformed {kind} {value:?}: expected {expected}")]
    Malformed {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },
}

const COURSE_SHAPE: &str = "NAME:GRADE:CREDITS or GRADE:CREDITS";
const SEMESTER_SHAPE: &str = "GPA:CREDITS";

/// Parse a `--course` value.
///
/// The name may itself contain `:`; the last two fields are always grade and
/// credits.
pub fn parse_course(value: &str) -> Result<Entry, InputError> {
    let mut parts = value.rsplitn(3, ':');
    let (Some(credits), Some(grade)) = (parts.next(), parts.next()) else {
        return Err(InputError::Malformed {
            kind: "course",
            value: value.to_string(),
            expected: COURSE_SHAPE,
        });
    };
    let name = parts.next().unwrap_or_default();

    let parsed = Grade::parse_lenient(&grade.trim().to_ascii_uppercase());
    if parsed.is_none() && !grade.trim().is_empty() {
        warn!(grade, "unknown grade, counting as 0 points");
    }
    warn_if_not_numeric("credits", credits);

    Ok(Entry::Course(CourseEntry {
        name: name.trim().to_string(),
        grade: parsed,
        credits: credits.trim().to_string(),
    }))
}

/// Parse a `--semester` value.
pub fn parse_semester(value: &str) -> Result<Entry, InputError> {
    let Some((gpa, credits)) = value.split_once(':') else {
        return Err(InputError::Malformed {
            kind: "semester",
            value: value.to_string(),
            expected: SEMESTER_SHAPE,
        });
    };
    if credits.contains(':') {
        return Err(InputError::Malformed {
            kind: "semester",
            value: value.to_string(),
            expected: SEMESTER_SHAPE,
        });
    }
    warn_if_not_numeric("gpa", gpa);
    warn_if_not_numeric("credits", credits);

    Ok(Entry::Semester(SemesterEntry {
        gpa: gpa.trim().to_string(),
        credits: credits.trim().to_string(),
    }))
}

fn warn_if_not_numeric(field: &str, text: &str) {
    if !is_numeric(text) {
        warn!(field, text, "not a number, counting as 0");
    }
}
