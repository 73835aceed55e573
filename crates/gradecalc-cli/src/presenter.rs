//! CLI result presenters: human-readable text and JSON.

use serde::Serialize;

use gradecalc_core::calculator::{CalculationResult, ResultPresenter};
use gradecalc_core::entry::{Entry, Field};

use crate::output::{format_average, format_number};
use crate::ui;

/// Text presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    precision: usize,
    color: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, precision: usize) -> Self {
        Self {
            verbose,
            quiet,
            precision,
            color: !ui::is_color_disabled(),
        }
    }

    /// Disable ANSI styling regardless of the environment.
    #[must_use]
    pub fn without_color(mut self) -> Self {
        self.color = false;
        self
    }

    /// Render a result as the lines that `present_result` prints.
    ///
    /// Quiet mode yields just the number, or nothing without a result.
    #[must_use]
    pub fn render(&self, result: &CalculationResult) -> Vec<String> {
        let value = format_average(result.result, self.precision);
        if self.quiet {
            return result.result.map(|_| value).into_iter().collect();
        }

        let mut lines = Vec::new();
        if self.verbose {
            lines.push(ui::header(result.mode.label(), self.color));
            for (i, row) in result.snapshot.iter().enumerate() {
                lines.push(format!("  {:>2}. {}", i + 1, describe_row(row)));
            }
            lines.push(format!("  Scale: {}", result.scale));
            lines.push(format!(
                "  Total credits: {}",
                format_number(result.totals.total_credits)
            ));
            lines.push(format!(
                "  Total points: {}",
                format_number(result.totals.total_points)
            ));
        }
        lines.push(ui::result_line(
            result.mode.label(),
            &value,
            result.is_computable(),
            self.color,
        ));
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult) {
        for line in self.render(result) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

/// One row of a verbose listing, e.g. `Calculus  A  3 cr`.
fn describe_row(row: &Entry) -> String {
    let text = |field| row.field_text(field).unwrap_or_default();
    match row {
        Entry::Course(_) => {
            let name = text(Field::Name);
            let name = if name.is_empty() { "(unnamed)" } else { name };
            let grade = text(Field::Grade);
            let grade = if grade.is_empty() { "-" } else { grade };
            format!("{name:<20} {grade:<2} {} cr", text(Field::Credits))
        }
        Entry::Semester(_) => {
            format!("GPA {:<6} {} cr", text(Field::Gpa), text(Field::Credits))
        }
    }
}

/// JSON document for one calculation.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a CalculationResult,
    /// The result as displayed, rounded.
    display: Option<String>,
}

/// JSON presenter: one pretty-printed object per calculation.
pub struct JsonResultPresenter {
    precision: usize,
}

impl JsonResultPresenter {
    #[must_use]
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Render a result as a JSON string.
    pub fn render(&self, result: &CalculationResult) -> serde_json::Result<String> {
        let report = JsonReport {
            result,
            display: result
                .result
                .map(|_| format_average(result.result, self.precision)),
        };
        serde_json::to_string_pretty(&report)
    }
}

impl ResultPresenter for JsonResultPresenter {
    fn present_result(&self, result: &CalculationResult) {
        match self.render(result) {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&e.to_string()),
        }
    }

    fn present_error(&self, error: &str) {
        let body = serde_json::json!({ "error": error });
        eprintln!("{body}");
    }
}
