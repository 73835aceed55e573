//! The two form modes: GPA over courses and CGPA over semesters.

use std::fmt;

use serde::Serialize;

use crate::entry::Entry;

/// Which average a list feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Courses weighted by credit hours.
    Gpa,
    /// Semester GPAs weighted by semester credit hours.
    Cgpa,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Gpa, Mode::Cgpa];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Mode::Gpa => "GPA",
            Mode::Cgpa => "CGPA",
        }
    }

    /// Blank row appended by "add".
    #[must_use]
    pub fn template(self) -> Entry {
        match self {
            Mode::Gpa => Entry::course(),
            Mode::Cgpa => Entry::semester(),
        }
    }

    /// Singular row noun, e.g. for "Add Course".
    #[must_use]
    pub fn row_noun(self) -> &'static str {
        match self {
            Mode::Gpa => "Course",
            Mode::Cgpa => "Semester",
        }
    }

    /// Whether rows can be deleted in this mode. The semester tab only grows.
    #[must_use]
    pub fn allows_remove(self) -> bool {
        matches!(self, Mode::Gpa)
    }

    /// The other mode.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Mode::Gpa => Mode::Cgpa,
            Mode::Cgpa => Mode::Gpa,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Mode::Gpa => 0,
            Mode::Cgpa => 1,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
