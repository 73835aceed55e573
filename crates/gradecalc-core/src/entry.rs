//! Form rows: course and semester entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::numeric::parse_lenient;
use crate::scale::PointsResolver;
use crate::store::StoreError;

/// A course row: name, letter grade, and credit hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub name: String,
    pub grade: Option<Grade>,
    pub credits: String,
}

/// A semester row: the semester GPA and its credit hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterEntry {
    pub gpa: String,
    pub credits: String,
}

/// One row of either list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entry {
    Course(CourseEntry),
    Semester(SemesterEntry),
}

/// An editable field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Grade,
    Credits,
    Gpa,
}

impl Field {
    /// Fields of a course row, in display order.
    pub const COURSE: [Field; 3] = [Field::Name, Field::Grade, Field::Credits];
    /// Fields of a semester row, in display order.
    pub const SEMESTER: [Field; 2] = [Field::Gpa, Field::Credits];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Course name",
            Field::Grade => "Grade",
            Field::Credits => "Credits",
            Field::Gpa => "GPA",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Entry {
    /// Blank course row.
    #[must_use]
    pub fn course() -> Self {
        Entry::Course(CourseEntry::default())
    }

    /// Blank semester row.
    #[must_use]
    pub fn semester() -> Self {
        Entry::Semester(SemesterEntry::default())
    }

    /// Short variant name used in logs and errors.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Course(_) => "course",
            Entry::Semester(_) => "semester",
        }
    }

    /// Fields this variant carries, in display order.
    #[must_use]
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Entry::Course(_) => &Field::COURSE,
            Entry::Semester(_) => &Field::SEMESTER,
        }
    }

    /// Raw credits text.
    #[must_use]
    pub fn credits_text(&self) -> &str {
        match self {
            Entry::Course(c) => &c.credits,
            Entry::Semester(s) => &s.credits,
        }
    }

    /// Credit hours, parsed leniently.
    #[must_use]
    pub fn credits(&self) -> f64 {
        parse_lenient(self.credits_text())
    }

    /// Grade points for this row. Courses consult `resolver`; semesters use
    /// their own GPA field.
    pub fn points<R: PointsResolver + ?Sized>(&self, resolver: &R) -> f64 {
        match self {
            Entry::Course(c) => resolver.points(c.grade),
            Entry::Semester(s) => parse_lenient(&s.gpa),
        }
    }

    /// Text shown for `field`, or `None` if this variant has no such field.
    #[must_use]
    pub fn field_text(&self, field: Field) -> Option<&str> {
        match (self, field) {
            (Entry::Course(c), Field::Name) => Some(&c.name),
            (Entry::Course(c), Field::Grade) => Some(c.grade.map_or("", Grade::label)),
            (Entry::Course(c), Field::Credits) => Some(&c.credits),
            (Entry::Semester(s), Field::Credits) => Some(&s.credits),
            (Entry::Semester(s), Field::Gpa) => Some(&s.gpa),
            _ => None,
        }
    }

    /// A copy of this entry with `field` replaced by `value`.
    ///
    /// Grade values are parsed leniently: an unknown token clears the grade.
    pub fn with_field(&self, field: Field, value: &str) -> Result<Self, StoreError> {
        let mut next = self.clone();
        match (&mut next, field) {
            (Entry::Course(c), Field::Name) => c.name = value.to_string(),
            (Entry::Course(c), Field::Grade) => c.grade = Grade::parse_lenient(value),
            (Entry::Course(c), Field::Credits) => c.credits = value.to_string(),
            (Entry::Semester(s), Field::Gpa) => s.gpa = value.to_string(),
            (Entry::Semester(s), Field::Credits) => s.credits = value.to_string(),
            (entry, field) => {
                return Err(StoreError::FieldMismatch {
                    field,
                    kind: entry.kind(),
                })
            }
        }
        Ok(next)
    }
}
