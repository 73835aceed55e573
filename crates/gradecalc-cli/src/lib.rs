//! # gradecalc-cli
//!
//! Row argument parsing, result formatting, presenters, and shell completion.

pub mod completion;
pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use input::{parse_course, parse_semester, InputError};
pub use presenter::{CLIResultPresenter, JsonResultPresenter};
