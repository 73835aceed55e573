//! Binds a grade scale to the engine for one "Calculate" action.

use serde::Serialize;
use tracing::info;

use crate::engine::{accumulate, Totals};
use crate::entry::Entry;
use crate::mode::Mode;
use crate::scale::GradeScale;
use crate::store::EntryList;

/// Outcome of one calculation over a snapshot of a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub mode: Mode,
    /// Weighted average, or `None` when there is no weight.
    pub result: Option<f64>,
    #[serde(flatten)]
    pub totals: Totals,
    /// Name of the scale course grades were resolved with.
    pub scale: String,
    /// Snapshot of the rows the result was computed from.
    #[serde(rename = "rows")]
    pub snapshot: Vec<Entry>,
}

impl CalculationResult {
    /// Whether a numeric result exists.
    #[must_use]
    pub fn is_computable(&self) -> bool {
        self.result.is_some()
    }
}

/// Computes GPA/CGPA with a fixed grade scale.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    scale: GradeScale,
}

impl Calculator {
    #[must_use]
    pub fn new(scale: GradeScale) -> Self {
        Self { scale }
    }

    #[must_use]
    pub fn scale(&self) -> &GradeScale {
        &self.scale
    }

    /// Replace the grade scale used by later calculations.
    pub fn set_scale(&mut self, scale: GradeScale) {
        self.scale = scale;
    }

    /// Compute the average of `list` for `mode`.
    #[must_use]
    pub fn calculate(&self, mode: Mode, list: &EntryList) -> CalculationResult {
        let totals = accumulate(list, &self.scale);
        let result = totals.average();
        info!(
            %mode,
            scale = self.scale.name(),
            rows = totals.entries,
            ?result,
            "calculated"
        );
        CalculationResult {
            mode,
            result,
            totals,
            scale: self.scale.name().to_string(),
            snapshot: list.as_slice().to_vec(),
        }
    }
}

/// Trait for presenting calculation results to the user.
pub trait ResultPresenter {
    /// Present one calculation.
    fn present_result(&self, result: &CalculationResult);

    /// Present an error.
    fn present_error(&self, error: &str);
}
