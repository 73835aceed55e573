//! Letter grades.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::GRADE_LABELS;

/// Error type for grade and scale lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradeError {
    /// The token is not one of the known letter grades.
    #[error("unknown grade: {0:?}")]
    UnknownGrade(String),

    /// No grade scale is registered under this name.
    #[error("unknown grade scale: {0}")]
    UnknownScale(String),

    /// A custom scale violates the 0..=4 range or the descending order.
    #[error("invalid grade scale: {0}")]
    InvalidScale(String),
}

/// A letter grade, ordered from best (`A`) to worst (`F`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Every grade, best first.
    pub const ALL: [Grade; 11] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::F,
    ];

    /// Position of this grade in [`Grade::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Display label, e.g. `"B+"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        GRADE_LABELS[self.index()]
    }

    /// The next lower grade, wrapping from `F` back to `A`.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The next higher grade, wrapping from `A` to `F`.
    #[must_use]
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Parse a token leniently: anything unknown is unset.
    #[must_use]
    pub fn parse_lenient(token: &str) -> Option<Self> {
        token.parse().ok()
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = GradeError;

    /// Labels match exactly: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GRADE_LABELS
            .iter()
            .position(|label| *label == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| GradeError::UnknownGrade(s.to_string()))
    }
}
