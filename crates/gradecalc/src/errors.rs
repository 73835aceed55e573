//! Error handling and exit codes.

use gradecalc_cli::input::InputError;
use gradecalc_core::constants::exit_codes;
use gradecalc_core::grade::GradeError;
use gradecalc_core::store::StoreError;

/// Invalid combination of flags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("nothing to calculate: pass --course or --semester rows, or use --tui")]
    NoRows,

    #[error("precision {given} exceeds the maximum of {max}")]
    PrecisionTooLarge { given: usize, max: usize },
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<GradeError>() {
        return match e {
            GradeError::UnknownGrade(_) => exit_codes::ERROR_INPUT,
            GradeError::UnknownScale(_) | GradeError::InvalidScale(_) => exit_codes::ERROR_CONFIG,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        exit_codes::ERROR_CONFIG
    } else if err.downcast_ref::<InputError>().is_some() || err.downcast_ref::<StoreError>().is_some()
    {
        exit_codes::ERROR_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}
