//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use gradecalc_cli::input::{parse_course, parse_semester};
use gradecalc_core::constants::{DEFAULT_PRECISION, DEFAULT_SCALE, MAX_PRECISION};
use gradecalc_core::entry::Entry;
use gradecalc_core::grade::GradeError;
use gradecalc_core::mode::Mode;
use gradecalc_core::scale::GradeScale;
use gradecalc_core::store::EntryList;

use crate::errors::ConfigError;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// GradeCalc — GPA and CGPA calculator.
#[derive(Parser, Debug)]
#[command(name = "gradecalc", version, about)]
pub struct AppConfig {
    /// Course row as NAME:GRADE:CREDITS or GRADE:CREDITS (repeatable).
    #[arg(long = "course", value_name = "NAME:GRADE:CREDITS", value_parser = parse_course)]
    pub courses: Vec<Entry>,

    /// Semester row as GPA:CREDITS (repeatable).
    #[arg(long = "semester", value_name = "GPA:CREDITS", value_parser = parse_semester)]
    pub semesters: Vec<Entry>,

    /// Grade scale used for course grades: standard or thirds.
    #[arg(long, default_value = DEFAULT_SCALE, env = "GRADECALC_SCALE")]
    pub scale: String,

    /// Decimal places in displayed results.
    #[arg(long, default_value_t = DEFAULT_PRECISION, env = "GRADECALC_PRECISION")]
    pub precision: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output (rows and totals).
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Launch the interactive form.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The configured grade scale.
    pub fn grade_scale(&self) -> Result<GradeScale, GradeError> {
        GradeScale::by_name(&self.scale)
    }

    /// Precision, bounded by [`MAX_PRECISION`].
    pub fn checked_precision(&self) -> Result<usize, ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                given: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(self.precision)
    }

    /// Non-empty row lists from the command line, GPA first.
    #[must_use]
    pub fn lists(&self) -> Vec<(Mode, EntryList)> {
        [(Mode::Gpa, &self.courses), (Mode::Cgpa, &self.semesters)]
            .into_iter()
            .filter(|(_, rows)| !rows.is_empty())
            .map(|(mode, rows)| (mode, EntryList::from(rows.clone())))
            .collect()
    }
}
