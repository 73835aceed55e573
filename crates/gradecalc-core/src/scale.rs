//! Grade-to-points scales.
//!
//! A `GradeScale` is a table of point values indexed by [`Grade`]. The engine
//! never reaches for a global table; callers hand it a [`PointsResolver`],
//! which every scale implements.

use serde::Serialize;

use crate::constants::{MAX_POINTS, STANDARD_POINTS, THIRDS_POINTS};
use crate::grade::{Grade, GradeError};

/// Resolves a course grade to grade points.
pub trait PointsResolver {
    /// Points for `grade`; unset grades resolve to `0.0`.
    fn points(&self, grade: Option<Grade>) -> f64;
}

impl<F> PointsResolver for F
where
    F: Fn(Option<Grade>) -> f64,
{
    fn points(&self, grade: Option<Grade>) -> f64 {
        self(grade)
    }
}

/// A named grade-to-points table on a 4.0 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeScale {
    name: String,
    points: [f64; 11],
}

impl GradeScale {
    /// One-decimal scale (A- = 3.7). This is the default.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            points: STANDARD_POINTS,
        }
    }

    /// Thirds scale (A- = 3.66).
    #[must_use]
    pub fn thirds() -> Self {
        Self {
            name: "thirds".to_string(),
            points: THIRDS_POINTS,
        }
    }

    /// Build a custom scale. Values must lie in `0.0..=4.0` and must not
    /// increase from `A` down to `F`.
    pub fn new(name: impl Into<String>, points: [f64; 11]) -> Result<Self, GradeError> {
        let name = name.into();
        if let Some(bad) = points
            .iter()
            .find(|p| !p.is_finite() || **p < 0.0 || **p > MAX_POINTS)
        {
            return Err(GradeError::InvalidScale(format!(
                "{name}: {bad} is outside 0..={MAX_POINTS}"
            )));
        }
        if let Some(i) = points.windows(2).position(|w| w[0] < w[1]) {
            return Err(GradeError::InvalidScale(format!(
                "{name}: {} scores below {}",
                Grade::ALL[i],
                Grade::ALL[i + 1]
            )));
        }
        Ok(Self { name, points })
    }

    /// Look up a built-in scale by name.
    pub fn by_name(name: &str) -> Result<Self, GradeError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "thirds" => Ok(Self::thirds()),
            _ => Err(GradeError::UnknownScale(name.to_string())),
        }
    }

    /// Names of the built-in scales.
    #[must_use]
    pub fn available() -> Vec<&'static str> {
        vec!["standard", "thirds"]
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Points for a grade.
    #[must_use]
    pub fn points_for(&self, grade: Grade) -> f64 {
        self.points[grade.index()]
    }

    /// Points for a raw token. Unknown or empty tokens are worth `0.0`.
    #[must_use]
    pub fn points_of(&self, token: &str) -> f64 {
        self.points(Grade::parse_lenient(token))
    }

    /// `(grade, points)` pairs, best grade first.
    pub fn iter(&self) -> impl Iterator<Item = (Grade, f64)> + '_ {
        Grade::ALL.iter().map(move |g| (*g, self.points_for(*g)))
    }
}

impl Default for GradeScale {
    fn default() -> Self {
        Self::standard()
    }
}

impl PointsResolver for GradeScale {
    fn points(&self, grade: Option<Grade>) -> f64 {
        grade.map_or(0.0, |g| self.points_for(g))
    }
}
